//! Signup Page

use csvdash::Route as AppRoute;
use leptos::*;
use leptos_router::*;

use crate::state::SessionContext;

/// Signup form. There is no account store; submitting starts a session
/// the same way logging in does.
#[component]
pub fn Signup() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        web_sys::console::log_1(
            &format!("Signing up {} <{}>", name.get_untracked(), email.get_untracked()).into(),
        );
        session.login();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <form
                on:submit=on_submit
                class="bg-white shadow-lg rounded-lg p-8 w-full max-w-sm space-y-4"
            >
                <h1 class="text-2xl font-bold text-gray-800 text-center">"Sign up"</h1>

                <input
                    type="text"
                    placeholder="Name"
                    required
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full border rounded-lg px-3 py-2"
                />
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
                    "Create account"
                </button>

                <p class="text-sm text-center text-gray-600">
                    "Already registered? "
                    <A href=AppRoute::Login.path() class="text-blue-500 hover:underline">"Log in"</A>
                </p>
            </form>
        </div>
    }
}
