//! Loading Component

use leptos::*;

/// Placeholder shown while a fetch has not landed
#[component]
pub fn Loading(message: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-2 py-4 text-gray-500 text-lg">
            <div class="loading-spinner w-5 h-5" />
            <span>{message}</span>
        </div>
    }
}
