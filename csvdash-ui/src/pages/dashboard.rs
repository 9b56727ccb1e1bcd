//! Dashboard Page
//!
//! Overview cards and column chart, or the record table, behind a
//! slide-in side menu. Both overview fetches re-run on entry and whenever
//! the list of uploaded files changes.

use csvdash::{upload_file, Backend, DashboardState, ViewMode};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api::{BrowserBackend, BrowserFile};
use crate::components::{ColumnChart, Loading, OverviewCard, RecordTableView, SideMenu};
use crate::state::SessionContext;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let backend = use_context::<BrowserBackend>().expect("BrowserBackend not found");
    let state = create_rw_signal(DashboardState::<BrowserFile>::new());
    let file_count = create_memo(move |_| state.with(|s| s.files().len()));

    // Independent fetches; whichever lands last wins its slot
    let backend_for_effect = backend.clone();
    create_effect(move |_| {
        file_count.track();

        let backend = backend_for_effect.clone();
        spawn_local(async move {
            let result = backend.overview().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch overview: {}", e).into());
            }
            state.update(|s| s.apply_overview(result));
        });

        let backend = backend_for_effect.clone();
        spawn_local(async move {
            let result = backend.column_counts().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch column counts: {}", e).into());
            }
            state.update(|s| s.apply_column_counts(result));
        });
    });

    let backend_for_select = backend.clone();
    let on_select = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(list) = input.files() else {
            return;
        };

        let selection: Vec<BrowserFile> = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(BrowserFile::from)
            .collect();

        match state.try_update(|s| s.accept_selection(selection)) {
            Some(Ok(accepted)) => {
                for file in accepted {
                    spawn_upload(backend_for_select.clone(), file);
                }
            }
            Some(Err(e)) => alert(&e.to_string()),
            None => {}
        }
    };

    let on_reupload = move |index: usize| {
        if let Some(file) = state.try_update(|s| s.reupload_and_switch_view(index)).flatten() {
            spawn_upload(backend.clone(), file);
        }
    };

    let on_logout = move |_: ()| {
        state.update(|s| s.logout(session.session()));
    };

    view! {
        <div class="relative min-h-screen bg-gray-100">
            <SideMenu
                state=state
                on_select=on_select
                on_reupload=on_reupload
                on_logout=on_logout
            />

            <button
                on:click=move |_| state.update(|s| s.toggle_menu())
                class="absolute top-4 left-4 bg-blue-500 text-white px-3 py-2 rounded-lg shadow-md z-40 hover:bg-blue-600"
            >
                "☰ Menu"
            </button>

            <div class="p-6">
                {move || match state.with(DashboardState::mode) {
                    ViewMode::Overview => view! { <Overview state=state /> }.into_view(),
                    ViewMode::RecordTable => view! { <RecordTableView /> }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Stat cards and the column chart
#[component]
fn Overview(state: RwSignal<DashboardState<BrowserFile>>) -> impl IntoView {
    let cards = create_memo(move |_| state.with(DashboardState::stat_cards));
    let counts = create_memo(move |_| state.with(|s| s.column_counts().ready().cloned()));

    view! {
        {move || match cards.get() {
            None => view! { <Loading message="Loading data..." /> }.into_view(),
            Some(cards) => view! {
                <div class="flex gap-4 items-center justify-center mb-6 flex-wrap">
                    {cards.into_iter()
                        .map(|card| view! {
                            <OverviewCard title=card.title value=card.display_value() />
                        })
                        .collect_view()}
                </div>
            }.into_view(),
        }}

        <div class="mt-8 bg-white shadow-md rounded-lg p-6">
            <h2 class="text-lg font-semibold mb-4">"📊 Rows per Column"</h2>
            {move || match counts.get() {
                None => view! { <Loading message="Loading chart..." /> }.into_view(),
                Some(counts) => view! { <ColumnChart counts=counts /> }.into_view(),
            }}
        </div>
    }
}

/// Upload one file and tell the user how it went
fn spawn_upload(backend: BrowserBackend, file: BrowserFile) {
    spawn_local(async move {
        let outcome = upload_file(&backend, &file).await;
        if !outcome.is_success() {
            web_sys::console::error_1(&format!("Error uploading file: {:?}", outcome).into());
        }
        alert(&outcome.alert_message());
    });
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
