//! Record Table Component
//!
//! One page of backend records with page-number navigation. The current
//! page drives the fetch: every change of it requests that page once.

use csvdash::{Backend, RecordTable};
use leptos::*;

use crate::api::BrowserBackend;
use crate::components::Loading;

/// Paginated record table
#[component]
pub fn RecordTableView() -> impl IntoView {
    let backend = use_context::<BrowserBackend>().expect("BrowserBackend not found");
    let table = create_rw_signal(RecordTable::default());
    let current_page = create_memo(move |_| table.with(RecordTable::current_page));

    // Fetch on mount and on every page change
    create_effect(move |_| {
        current_page.track();

        let Some(request) = table.try_update(RecordTable::begin_load) else {
            return;
        };
        let backend = backend.clone();
        spawn_local(async move {
            let result = backend.page(request.page, request.limit).await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Failed to fetch page {}: {}", request.page, e).into(),
                );
            }
            table.update(|t| t.apply_page(result));
        });
    });

    view! {
        <div class="p-6 bg-gray-100 min-h-screen">
            <h2 class="text-2xl font-bold text-gray-800 mb-6 text-center">"Record Table"</h2>

            {move || {
                if table.with(RecordTable::is_loading) {
                    view! { <Loading message="Loading data..." /> }.into_view()
                } else {
                    view! {
                        <Records table=table />
                        <Pagination table=table />
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn Records(table: RwSignal<RecordTable>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-white shadow-lg rounded-lg">
            <table class="w-full table-auto border-collapse">
                <thead>
                    <tr class="bg-gray-100 text-gray-600 uppercase text-sm leading-normal">
                        {move || {
                            table.with(RecordTable::headers)
                                .into_iter()
                                .map(|label| view! { <th class="py-3 px-6 text-left">{label}</th> })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody class="text-gray-600 text-sm font-light">
                    {move || {
                        let (rows, colspan) = table.with(|t| (t.rows(), t.empty_colspan()));
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan=colspan.to_string() class="text-center py-3 px-6 text-gray-500">
                                        "No records found"
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            rows.into_iter()
                                .map(|row| view! {
                                    <tr class="border-b border-gray-200 hover:bg-gray-50">
                                        {row.into_iter()
                                            .map(|cell| view! { <td class="py-3 px-6">{cell}</td> })
                                            .collect_view()}
                                    </tr>
                                })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn Pagination(table: RwSignal<RecordTable>) -> impl IntoView {
    let step_class = |enabled: bool| {
        let base = "px-4 py-2 border rounded";
        if enabled {
            format!("{} bg-blue-500 text-white hover:bg-blue-600", base)
        } else {
            format!("{} cursor-not-allowed bg-gray-200", base)
        }
    };

    view! {
        <div class="flex justify-center items-center mt-6 space-x-2">
            <button
                class=move || step_class(table.with(RecordTable::has_previous))
                disabled=move || !table.with(RecordTable::has_previous)
                on:click=move |_| table.update(|t| {
                    t.previous();
                })
            >
                "<"
            </button>

            {move || {
                table.with(RecordTable::window)
                    .pages()
                    .map(|number| view! {
                        <button
                            class=move || {
                                if table.with(RecordTable::current_page) == number {
                                    "px-4 py-2 border rounded bg-blue-500 text-white"
                                } else {
                                    "px-4 py-2 border rounded bg-white hover:bg-gray-100"
                                }
                            }
                            on:click=move |_| table.update(|t| {
                                t.paginate(number);
                            })
                        >
                            {number}
                        </button>
                    })
                    .collect_view()
            }}

            <button
                class=move || step_class(table.with(RecordTable::has_next))
                disabled=move || !table.with(RecordTable::has_next)
                on:click=move |_| table.update(|t| {
                    t.next();
                })
            >
                ">"
            </button>
        </div>
    }
}
