//! Login page view. Public-only: an authenticated visitor is sent to the
//! dashboard once the session has resolved.

use dioxus::prelude::*;

use ui::validate::validate_login;
use ui::{log_in, show_error, show_success, use_api, use_auth, use_toasts};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    if auth().loading {
        return rsx! { div { class: "loading-app", "Loading…" } };
    }
    if auth().user.is_some() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let email_value = email();
        let password_value = password();
        if let Err(msg) = validate_login(&email_value, &password_value) {
            return show_error(toasts, msg);
        }

        let client = client.clone();
        submitting.set(true);
        spawn(async move {
            match log_in(&client, auth, &email_value, &password_value).await {
                Ok(()) => {
                    show_success(toasts, "Signed in");
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::warn!("login failed: {err}");
                    show_error(toasts, err.user_message("Invalid email or password"));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",
            div {
                class: "login-card",
                h2 { "Sign in" }
                p { class: "subtitle", "Access your secure banking space" }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "form-group",
                        label { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "name@example.com",
                            value: email(),
                            disabled: submitting(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Password" }
                        input {
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            disabled: submitting(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "login-btn",
                        disabled: submitting(),
                        if submitting() { "Signing in…" } else { "Sign in" }
                    }
                }

                p {
                    class: "register-link",
                    "New here? "
                    Link { to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
