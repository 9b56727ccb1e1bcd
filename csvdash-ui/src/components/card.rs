//! Overview Card Component

use leptos::*;

/// A titled value
#[component]
pub fn OverviewCard(
    title: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow-lg rounded-lg p-4 w-48 text-center">
            <h3 class="text-sm text-gray-600 mb-1">{title}</h3>
            <div class="text-2xl font-bold text-gray-800">{value}</div>
        </div>
    }
}
