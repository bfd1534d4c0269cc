//! Account list panel with the create-account modal.

use api::{Account, AccountType, CreateAccountRequest};
use dioxus::prelude::*;

use crate::icons::{FaCreditCard, FaWallet};
use crate::validate::parse_non_negative;
use crate::{show_error, show_success, use_api, use_auth, use_currency, use_toasts, Icon, ModalOverlay};

#[component]
pub fn AccountsPanel(
    accounts: Vec<Account>,
    selected_id: Option<i64>,
    on_select: EventHandler<i64>,
    on_refresh: EventHandler<()>,
) -> Element {
    let client = use_api();
    let auth = use_auth();
    let currency = use_currency();
    let toasts = use_toasts();
    let mut show_create = use_signal(|| false);
    let mut account_type = use_signal(|| AccountType::Checking);
    let mut overdraft = use_signal(|| "0".to_string());
    let mut interest = use_signal(|| "0".to_string());
    let mut submitting = use_signal(|| false);

    let mut close_modal = move || {
        show_create.set(false);
        account_type.set(AccountType::Checking);
        overdraft.set("0".to_string());
        interest.set("0".to_string());
    };

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();

        let overdraft_limit = match parse_non_negative(&overdraft(), "Overdraft limit") {
            Ok(value) => value,
            Err(msg) => return show_error(toasts, msg),
        };
        let interest_rate = match parse_non_negative(&interest(), "Interest rate") {
            Ok(value) => value,
            Err(msg) => return show_error(toasts, msg),
        };
        let Some(user_id) = auth.peek().user.as_ref().map(|u| u.id) else {
            return;
        };

        let body = CreateAccountRequest {
            user_id,
            account_type: account_type(),
            overdraft_limit,
            interest_rate,
        };
        let client = client.clone();
        submitting.set(true);
        spawn(async move {
            match client.create_account(&body).await {
                Ok(_) => {
                    show_success(toasts, "Account created");
                    close_modal();
                    on_refresh.call(());
                }
                Err(err) => {
                    show_error(toasts, err.user_message("Failed to create the account"));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "accounts-container",
            div {
                class: "accounts-header",
                h2 { "My accounts" }
                button {
                    class: "create-btn",
                    onclick: move |_| show_create.set(true),
                    "+ New account"
                }
            }

            div {
                class: "accounts-list",
                for account in accounts.iter().cloned() {
                    div {
                        key: "{account.id}",
                        class: if selected_id == Some(account.id) {
                            "account-card selected"
                        } else {
                            "account-card"
                        },
                        onclick: move |_| on_select.call(account.id),
                        div {
                            class: "account-type",
                            if account.account_type == AccountType::Checking {
                                Icon { icon: FaCreditCard, width: 16, height: 16 }
                            } else {
                                Icon { icon: FaWallet, width: 16, height: 16 }
                            }
                            "{account.account_type.label()}"
                        }
                        div { class: "account-number", "No. {account.account_number}" }
                        div { class: "account-balance", "{currency().format(account.balance)}" }
                    }
                }
            }

            if accounts.is_empty() {
                div {
                    class: "no-accounts",
                    p { "No accounts yet. Create your first one!" }
                }
            }

            if show_create() {
                ModalOverlay {
                    on_close: move |_| close_modal(),
                    h3 { "Create a new account" }
                    form {
                        onsubmit: handle_create,
                        div {
                            class: "form-group",
                            label { "Account type" }
                            select {
                                value: account_type().as_str(),
                                onchange: move |evt| {
                                    let next = if evt.value() == "savings" {
                                        AccountType::Savings
                                    } else {
                                        AccountType::Checking
                                    };
                                    account_type.set(next);
                                },
                                option { value: "checking", "Checking account" }
                                option { value: "savings", "Savings account" }
                            }
                        }
                        div {
                            class: "form-group",
                            label { "Overdraft limit" }
                            input {
                                r#type: "number",
                                min: "0",
                                value: overdraft(),
                                oninput: move |evt| overdraft.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { "Interest rate (%)" }
                            input {
                                r#type: "number",
                                min: "0",
                                step: "0.01",
                                value: interest(),
                                oninput: move |evt| interest.set(evt.value()),
                            }
                        }
                        div {
                            class: "modal-buttons",
                            button {
                                r#type: "button",
                                class: "cancel-btn",
                                onclick: move |_| close_modal(),
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                class: "confirm-btn",
                                disabled: submitting(),
                                if submitting() { "Creating…" } else { "Create" }
                            }
                        }
                    }
                }
            }
        }
    }
}
