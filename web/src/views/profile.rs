//! Profile view: read-only personal and account information, plus the
//! change-password form. Authenticated-only.

use api::ChangePasswordRequest;
use dioxus::prelude::*;

use ui::validate::validate_change_password;
use ui::{show_error, show_success, use_api, use_auth, use_toasts};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! { div { class: "loading-app", "Loading…" } };
    }
    let Some(user) = auth().user else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    let first_name = user.first_name.clone().unwrap_or_else(|| "Not provided".to_string());
    let last_name = user.last_name.clone().unwrap_or_else(|| "Not provided".to_string());
    let phone = user.phone.clone().unwrap_or_else(|| "Not provided".to_string());
    let created = user
        .created_at
        .as_deref()
        .map(|ts| ts.chars().take(10).collect::<String>())
        .unwrap_or_else(|| "Not available".to_string());

    rsx! {
        div {
            class: "profile-container",
            div {
                class: "profile-header",
                h1 { "Personal information" }
                p { "Review and manage your personal details" }
            }

            div {
                class: "profile-card",
                div {
                    class: "profile-section",
                    h2 { "Basic information" }
                    div {
                        class: "info-grid",
                        div {
                            class: "info-item",
                            label { "First name" }
                            div { class: "info-value", "{first_name}" }
                        }
                        div {
                            class: "info-item",
                            label { "Last name" }
                            div { class: "info-value", "{last_name}" }
                        }
                        div {
                            class: "info-item",
                            label { "Email" }
                            div { class: "info-value", "{user.email}" }
                        }
                        div {
                            class: "info-item",
                            label { "Phone" }
                            div { class: "info-value", "{phone}" }
                        }
                    }
                }

                div {
                    class: "profile-section",
                    h2 { "Account information" }
                    div {
                        class: "info-grid",
                        div {
                            class: "info-item",
                            label { "User id" }
                            div { class: "info-value", "{user.id}" }
                        }
                        div {
                            class: "info-item",
                            label { "Member since" }
                            div { class: "info-value", "{created}" }
                        }
                    }
                }
            }

            ChangePasswordCard {}
        }
    }
}

#[component]
fn ChangePasswordCard() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if let Err(msg) = validate_change_password(&current(), &new_password(), &confirm()) {
            return show_error(toasts, msg);
        }

        let body = ChangePasswordRequest {
            current_password: current(),
            new_password: new_password(),
        };
        let client = client.clone();
        submitting.set(true);
        spawn(async move {
            match client.change_password(&body).await {
                Ok(()) => {
                    show_success(toasts, "Password changed");
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => {
                    show_error(toasts, err.user_message("Failed to change the password"));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "change-password-card",
            h2 { "Change password" }
            p { class: "subtitle", "Use a strong, unique password" }

            form {
                onsubmit: handle_submit,
                div {
                    class: "form-group",
                    label { "Current password" }
                    input {
                        r#type: "password",
                        placeholder: "Enter your current password",
                        value: current(),
                        oninput: move |evt| current.set(evt.value()),
                    }
                }
                div {
                    class: "form-group",
                    label { "New password" }
                    input {
                        r#type: "password",
                        placeholder: "Enter your new password",
                        value: new_password(),
                        oninput: move |evt| new_password.set(evt.value()),
                    }
                    span { class: "hint", "At least 6 characters" }
                }
                div {
                    class: "form-group",
                    label { "Confirm new password" }
                    input {
                        r#type: "password",
                        placeholder: "Confirm your new password",
                        value: confirm(),
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "submit-btn",
                    disabled: submitting(),
                    if submitting() { "Updating…" } else { "Change password" }
                }
            }
        }
    }
}
