//! Dashboard: the account list and the selected account's transactions.
//! Authenticated-only.
//!
//! The account list is the only holder of account state; it is re-fetched
//! wholesale after every mutation (create, deposit, withdraw, transfer) so
//! displayed balances are always backend truth, never client arithmetic.

use api::Account;
use dioxus::prelude::*;

use ui::{show_error, use_api, use_auth, use_toasts, AccountsPanel, TransactionsPanel};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut accounts = use_signal(Vec::<Account>::new);
    let mut selected_id = use_signal(|| Option::<i64>::None);
    let mut loading = use_signal(|| true);

    let fetch_accounts = use_callback({
        let client = client.clone();
        move |()| {
            let client = client.clone();
            let Some(user_id) = auth.peek().user.as_ref().map(|u| u.id) else {
                return;
            };
            spawn(async move {
                match client.user_accounts(user_id).await {
                    Ok(list) => {
                        // Keep the current selection when it survives the
                        // refresh, else fall back to the first account.
                        let current = *selected_id.peek();
                        let next = current
                            .filter(|id| list.iter().any(|a| a.id == *id))
                            .or_else(|| list.first().map(|a| a.id));
                        selected_id.set(next);
                        accounts.set(list);
                    }
                    Err(err) => {
                        show_error(toasts, err.user_message("Failed to load accounts"));
                    }
                }
                loading.set(false);
            });
        }
    });

    use_effect(move || {
        if auth().user.is_some() {
            fetch_accounts.call(());
        }
    });

    if auth().loading {
        return rsx! { div { class: "loading-app", "Loading…" } };
    }
    let Some(user) = auth().user else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    let selected_account = accounts()
        .iter()
        .find(|account| Some(account.id) == selected_id())
        .cloned();

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "dashboard-header",
                h1 { "Dashboard" }
                p { "Welcome, {user.greeting_name()}" }
            }

            if loading() {
                div { class: "loading", "Loading…" }
            } else {
                div {
                    class: "dashboard-grid",
                    div {
                        class: "accounts-section",
                        AccountsPanel {
                            accounts: accounts(),
                            selected_id: selected_id(),
                            on_select: move |id| selected_id.set(Some(id)),
                            on_refresh: move |_| fetch_accounts.call(()),
                        }
                    }
                    div {
                        class: "transactions-section",
                        if let Some(account) = selected_account {
                            TransactionsPanel {
                                account,
                                on_refresh: move |_| fetch_accounts.call(()),
                            }
                        } else {
                            div {
                                class: "no-account",
                                p { "Select an account to see its transactions" }
                            }
                        }
                    }
                }
            }
        }
    }
}
