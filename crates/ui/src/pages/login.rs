//! # Login Page
//!
//! The only page reachable without a session. A successful login stores
//! the session (token + user) on disk and navigates to the dashboard;
//! failures surface the server's message and leave the form editable.

use dioxus::prelude::*;

use crate::components::inputs::TextInput;
use crate::state::APP_STATE;

/// Sign-in form
#[component]
pub fn LoginPage() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let submit = use_callback(move |_: ()| {
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            let client = APP_STATE.read().client.clone();
            match client.login(&email_value, &password_value).await {
                Ok(session) => {
                    busy.set(false);
                    APP_STATE.write().sign_in(session);
                }
                Err(e) => {
                    busy.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    });

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-slate-100 p-6",

            div {
                class: "bg-white w-full max-w-sm rounded-2xl p-8 shadow-xl",

                div {
                    class: "text-center mb-8",
                    span { class: "text-4xl", "🏢" }
                    h1 { class: "text-xl font-black text-slate-900 mt-2", "Hostel Desk" }
                    p { class: "text-xs text-slate-400 font-bold uppercase tracking-widest mt-1",
                        "Admin Console"
                    }
                }

                if let Some(message) = error.read().clone() {
                    div {
                        class: "mb-4 p-3 bg-rose-50 border border-rose-200 rounded-lg text-sm text-rose-600",
                        "{message}"
                    }
                }

                form {
                    class: "space-y-4",
                    onsubmit: move |e| {
                        e.prevent_default();
                        submit.call(());
                    },

                    TextInput {
                        value: email.read().clone(),
                        label: "Email".to_string(),
                        input_type: "email",
                        required: true,
                        on_change: move |v: String| email.set(v),
                    }

                    TextInput {
                        value: password.read().clone(),
                        label: "Password".to_string(),
                        input_type: "password",
                        required: true,
                        on_change: move |v: String| password.set(v),
                        on_enter: move |_| submit.call(()),
                    }

                    button {
                        r#type: "submit",
                        class: "w-full bg-slate-900 text-white py-3 text-xs font-bold uppercase tracking-widest rounded-lg hover:bg-slate-800 disabled:opacity-60",
                        disabled: busy(),
                        if busy() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
