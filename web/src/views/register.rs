//! Registration page view. Public-only; a successful registration sends the
//! visitor back to the login page.

use api::RegisterRequest;
use dioxus::prelude::*;

use ui::validate::{validate_register, RegisterForm};
use ui::{show_error, show_success, use_api, use_auth, use_toasts};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
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

        let first = first_name();
        let last = last_name();
        let email_value = email();
        let password_value = password();
        let confirm_value = confirm_password();
        let form = RegisterForm {
            first_name: &first,
            last_name: &last,
            email: &email_value,
            password: &password_value,
            confirm_password: &confirm_value,
        };
        if let Err(msg) = validate_register(&form) {
            return show_error(toasts, msg);
        }

        let phone_value = phone().trim().to_string();
        let body = RegisterRequest {
            email: email_value.trim().to_string(),
            password: password_value,
            first_name: Some(first.trim().to_string()),
            last_name: Some(last.trim().to_string()),
            phone: (!phone_value.is_empty()).then_some(phone_value),
        };
        let client = client.clone();
        submitting.set(true);
        spawn(async move {
            match client.register(&body).await {
                Ok(_) => {
                    show_success(toasts, "Account created, you can now sign in");
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    show_error(toasts, err.user_message("Registration failed"));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "register-container",
            div {
                class: "register-card",
                h2 { "Create an account" }
                p { class: "subtitle", "Join us today" }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "form-group",
                        label { "First name" }
                        input {
                            r#type: "text",
                            placeholder: "Jean",
                            value: first_name(),
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Last name" }
                        input {
                            r#type: "text",
                            placeholder: "Dupont",
                            value: last_name(),
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "name@example.com",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Phone (optional)" }
                        input {
                            r#type: "tel",
                            placeholder: "0612345678",
                            value: phone(),
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Password" }
                        input {
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Confirm password" }
                        input {
                            r#type: "password",
                            placeholder: "••••••••",
                            value: confirm_password(),
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "register-btn",
                        disabled: submitting(),
                        if submitting() { "Creating…" } else { "Create my account" }
                    }
                }

                p {
                    class: "login-link",
                    "Already a customer? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
