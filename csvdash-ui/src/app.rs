//! App Root Component
//!
//! Main application component with routing and global providers.

use csvdash::{resolve, Resolution, Route as AppRoute, DEFAULT_API_BASE};
use leptos::*;
use leptos_router::*;

use crate::api::BrowserBackend;
use crate::pages::{Dashboard, Login, Signup};
use crate::state::{provide_session, SessionContext};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session();
    provide_context(BrowserBackend::new(DEFAULT_API_BASE));

    view! {
        <Router>
            <main class="min-h-screen bg-gray-100">
                <Routes>
                    <Route
                        path=AppRoute::Login.path()
                        view=|| view! { <Guarded><Login /></Guarded> }
                    />
                    <Route
                        path=AppRoute::Signup.path()
                        view=|| view! { <Guarded><Signup /></Guarded> }
                    />
                    <Route
                        path=AppRoute::Home.path()
                        view=|| view! { <Guarded><Dashboard /></Guarded> }
                    />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// Runs the current path through its route guard on every navigation and
/// every session change.
#[component]
fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let location = use_location();

    move || match resolve(&location.pathname.get(), &session) {
        Resolution::Render(_) => children().into_view(),
        Resolution::Redirect(target) => view! { <Redirect path=target.path() /> }.into_view(),
        Resolution::NotFound => view! { <NotFound /> }.into_view(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=AppRoute::Home.path()
                class="px-6 py-3 bg-blue-500 hover:bg-blue-600 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
