//! Side Menu Component
//!
//! Slide-in menu: view switching, uploaded files, upload control, logout.

use csvdash::{DashboardState, SelectedFile, ViewMode};
use leptos::*;

use crate::api::BrowserFile;

/// Side menu bound to the dashboard state
#[component]
pub fn SideMenu(
    state: RwSignal<DashboardState<BrowserFile>>,
    /// Change event of the file input
    #[prop(into)]
    on_select: Callback<web_sys::Event>,
    /// Index of a remembered file that was clicked
    #[prop(into)]
    on_reupload: Callback<usize>,
    #[prop(into)]
    on_logout: Callback<()>,
) -> impl IntoView {
    let panel_class = move || {
        let offset = if state.with(DashboardState::is_menu_open) {
            "translate-x-0"
        } else {
            "-translate-x-64"
        };
        format!(
            "fixed top-0 left-0 h-full w-64 bg-white shadow-lg transform {} transition-transform duration-300 z-50",
            offset
        )
    };

    view! {
        <div class=panel_class>
            <button
                on:click=move |_| state.update(|s| s.close_menu())
                class="absolute top-3 right-3 text-gray-600 hover:text-red-500"
            >
                "✖️"
            </button>

            <div class="flex flex-col p-6 space-y-4 mt-8">
                <ModeButton state=state mode=ViewMode::Overview icon="📊" />
                <ModeButton state=state mode=ViewMode::RecordTable icon="📋" />

                // Uploaded files, oldest first
                <div class="mt-2 flex flex-col space-y-1">
                    {move || {
                        state.with(|s| s.files().iter().map(SelectedFile::name).collect::<Vec<_>>())
                            .into_iter()
                            .enumerate()
                            .map(|(index, name)| view! {
                                <button
                                    on:click=move |_| on_reupload.call(index)
                                    class="bg-gray-200 p-2 rounded-lg hover:bg-blue-100 text-left text-sm"
                                >
                                    "📂 " {name}
                                </button>
                            })
                            .collect_view()
                    }}
                </div>

                <label class="bg-blue-500 text-white text-center py-2 px-4 rounded-lg cursor-pointer hover:bg-blue-600">
                    "Upload Files"
                    <input
                        type="file"
                        accept=".csv"
                        class="hidden"
                        multiple
                        on:change=move |ev| on_select.call(ev)
                    />
                </label>

                <button
                    on:click=move |_| on_logout.call(())
                    class="py-2 px-4 text-left bg-red-500 text-white rounded-lg hover:bg-red-600 mt-4"
                >
                    "🚪 Logout"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ModeButton(
    state: RwSignal<DashboardState<BrowserFile>>,
    mode: ViewMode,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| state.update(|s| s.select_mode(mode))
            class=move || {
                let base = "py-2 px-4 text-left rounded-lg hover:bg-blue-100";
                if state.with(DashboardState::mode) == mode {
                    format!("{} bg-blue-500 text-white", base)
                } else {
                    format!("{} bg-gray-100", base)
                }
            }
        >
            {icon} " " {mode.label()}
        </button>
    }
}
