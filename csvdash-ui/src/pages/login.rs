//! Login Page

use csvdash::Route as AppRoute;
use leptos::*;
use leptos_router::*;

use crate::state::SessionContext;

/// Login form. Any submission logs in; the public guard then moves on.
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        web_sys::console::log_1(&format!("Logging in as {}", email.get_untracked()).into());
        session.login();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <form
                on:submit=on_submit
                class="bg-white shadow-lg rounded-lg p-8 w-full max-w-sm space-y-4"
            >
                <h1 class="text-2xl font-bold text-gray-800 text-center">"Log in"</h1>

                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full border rounded-lg px-3 py-2"
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="w-full border rounded-lg px-3 py-2"
                />

                <button
                    type="submit"
                    class="w-full bg-blue-500 text-white py-2 rounded-lg hover:bg-blue-600"
                >
                    "Log in"
                </button>

                <p class="text-sm text-center text-gray-600">
                    "No account? "
                    <A href=AppRoute::Signup.path() class="text-blue-500 hover:underline">"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
