//! Transaction history panel for the selected account, with the
//! deposit / withdraw / transfer modals.
//!
//! Refetches are guarded by a monotonically increasing generation token:
//! switching accounts while a fetch is in flight can otherwise let the
//! superseded response overwrite fresher state, so any completion whose
//! token is no longer the latest is discarded.

use api::{Account, Transaction, TransactionKind};
use dioxus::prelude::*;

use crate::icons::{FaArrowRightArrowLeft, FaClockRotateLeft, FaDownload, FaUpload};
use crate::validate::{parse_account_id, parse_amount};
use crate::{show_error, show_success, use_api, use_currency, use_toasts, Icon, ModalOverlay};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TxModal {
    Deposit,
    Withdraw,
    Transfer,
}

/// An outgoing leg renders with a minus sign: withdrawals, and transfers
/// whose source is the displayed account. Every other leg is incoming.
fn is_outgoing(tx: &Transaction, displayed_account_id: i64) -> bool {
    match tx.transaction_type {
        TransactionKind::Withdraw => true,
        TransactionKind::Transfer => tx.from_account_id == Some(displayed_account_id),
        TransactionKind::Deposit => false,
    }
}

/// ISO timestamps from the backend read fine with the `T` swapped for a
/// space; keep date plus hh:mm.
fn format_timestamp(raw: &str) -> String {
    let spaced = raw.replacen('T', " ", 1);
    match spaced.char_indices().nth(16) {
        Some((idx, _)) => spaced[..idx].to_string(),
        None => spaced,
    }
}

#[component]
pub fn TransactionsPanel(account: Account, on_refresh: EventHandler<()>) -> Element {
    let client = use_api();
    let currency = use_currency();
    let toasts = use_toasts();
    let mut transactions = use_signal(Vec::<Transaction>::new);
    let mut fetch_seq = use_signal(|| 0u64);
    let mut open_modal = use_signal(|| Option::<TxModal>::None);
    let mut amount = use_signal(String::new);
    let mut to_account = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let account_id = account.id;

    let fetch_transactions = use_callback({
        let client = client.clone();
        move |()| {
            let client = client.clone();
            let seq = *fetch_seq.peek() + 1;
            fetch_seq.set(seq);
            spawn(async move {
                match client.account_transactions(account_id).await {
                    Ok(list) => {
                        // Drop superseded responses; only the latest issued
                        // generation may write.
                        if *fetch_seq.peek() == seq {
                            transactions.set(list);
                        }
                    }
                    Err(err) => {
                        tracing::error!("failed to load transactions: {err}");
                    }
                }
            });
        }
    });

    use_effect(use_reactive!(|(account_id,)| {
        let _ = account_id;
        fetch_transactions.call(());
    }));

    let mut close_modal = move || {
        open_modal.set(None);
        amount.set(String::new());
        to_account.set(String::new());
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(kind) = *open_modal.peek() else {
            return;
        };

        let value = match parse_amount(&amount()) {
            Ok(value) => value,
            Err(msg) => return show_error(toasts, msg),
        };
        let destination = if kind == TxModal::Transfer {
            match parse_account_id(&to_account()) {
                Ok(id) => Some(id),
                Err(msg) => return show_error(toasts, msg),
            }
        } else {
            None
        };

        let client = client.clone();
        submitting.set(true);
        spawn(async move {
            let result = match kind {
                TxModal::Deposit => client.deposit(account_id, value).await,
                TxModal::Withdraw => client.withdraw(account_id, value).await,
                TxModal::Transfer => {
                    client
                        .transfer(account_id, destination.unwrap_or_default(), value)
                        .await
                }
            };
            match result {
                Ok(()) => {
                    let message = match kind {
                        TxModal::Deposit => "Deposit completed",
                        TxModal::Withdraw => "Withdrawal completed",
                        TxModal::Transfer => "Transfer completed",
                    };
                    show_success(toasts, message);
                    close_modal();
                    on_refresh.call(());
                    fetch_transactions.call(());
                }
                Err(err) => {
                    let fallback = match kind {
                        TxModal::Deposit => "Deposit failed",
                        TxModal::Withdraw => "Withdrawal failed",
                        TxModal::Transfer => "Transfer failed",
                    };
                    show_error(toasts, err.user_message(fallback));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "transactions-container",
            div {
                class: "transactions-header",
                h2 { "Account No. {account.account_number}" }
                div {
                    class: "action-buttons",
                    button {
                        class: "deposit-btn",
                        onclick: move |_| open_modal.set(Some(TxModal::Deposit)),
                        Icon { icon: FaDownload, width: 16, height: 16 }
                        "Deposit"
                    }
                    button {
                        class: "withdraw-btn",
                        onclick: move |_| open_modal.set(Some(TxModal::Withdraw)),
                        Icon { icon: FaUpload, width: 16, height: 16 }
                        "Withdraw"
                    }
                    button {
                        class: "transfer-btn",
                        onclick: move |_| open_modal.set(Some(TxModal::Transfer)),
                        Icon { icon: FaArrowRightArrowLeft, width: 16, height: 16 }
                        "Transfer"
                    }
                }
            }

            div {
                class: "account-info",
                div {
                    class: "info-item",
                    span { "Current balance" }
                    strong { "{currency().format(account.balance)}" }
                }
                div {
                    class: "info-item",
                    span { "Overdraft limit" }
                    strong { "{currency().format(account.overdraft_limit)}" }
                }
                div {
                    class: "info-item",
                    span { "Type" }
                    strong { "{account.account_type.label()}" }
                }
            }

            h3 {
                class: "history-title",
                Icon { icon: FaClockRotateLeft, width: 18, height: 18 }
                "Transaction history"
            }

            div {
                class: "transactions-list",
                if transactions().is_empty() {
                    p { class: "no-transactions", "No transactions on this account" }
                }
                for tx in transactions().iter().cloned() {
                    TransactionRow { key: "{tx.id}", tx, displayed_account_id: account_id }
                }
            }

            if let Some(kind) = open_modal() {
                ModalOverlay {
                    on_close: move |_| close_modal(),
                    h3 {
                        if kind == TxModal::Deposit {
                            "Deposit money"
                        } else if kind == TxModal::Withdraw {
                            "Withdraw money"
                        } else {
                            "Make a transfer"
                        }
                    }
                    form {
                        onsubmit: handle_submit,
                        div {
                            class: "form-group",
                            label { "Amount" }
                            input {
                                r#type: "number",
                                min: "0",
                                step: "0.01",
                                required: true,
                                value: amount(),
                                oninput: move |evt| amount.set(evt.value()),
                            }
                        }
                        if kind == TxModal::Transfer {
                            div {
                                class: "form-group",
                                label { "Destination account id" }
                                input {
                                    r#type: "text",
                                    placeholder: "e.g. 42",
                                    required: true,
                                    value: to_account(),
                                    oninput: move |evt| to_account.set(evt.value()),
                                }
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
                                if submitting() { "Sending…" } else { "Confirm" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TransactionRow(tx: Transaction, displayed_account_id: i64) -> Element {
    let currency = use_currency();
    let outgoing = is_outgoing(&tx, displayed_account_id);
    let sign = if outgoing { "-" } else { "+" };
    let amount_class = if outgoing {
        "transaction-amount outgoing"
    } else {
        "transaction-amount incoming"
    };

    rsx! {
        div {
            class: "transaction-item",
            div {
                class: "transaction-icon",
                if tx.transaction_type == TransactionKind::Deposit {
                    Icon { icon: FaDownload, width: 16, height: 16 }
                } else if tx.transaction_type == TransactionKind::Withdraw {
                    Icon { icon: FaUpload, width: 16, height: 16 }
                } else {
                    Icon { icon: FaArrowRightArrowLeft, width: 16, height: 16 }
                }
            }
            div {
                class: "transaction-details",
                div { class: "transaction-type", "{tx.transaction_type.label()}" }
                div { class: "transaction-date", "{format_timestamp(&tx.created_at)}" }
                if let Some(description) = tx.description.as_ref() {
                    div { class: "transaction-desc", "{description}" }
                }
            }
            div {
                class: amount_class,
                "{sign}{currency().format(tx.amount.abs())}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TransactionKind, from: Option<i64>, to: Option<i64>) -> Transaction {
        Transaction {
            id: 1,
            account_id: 3,
            transaction_type: kind,
            amount: 25.0,
            description: None,
            created_at: "2025-04-02T10:00:00".to_string(),
            from_account_id: from,
            to_account_id: to,
        }
    }

    #[test]
    fn test_withdrawals_are_outgoing() {
        assert!(is_outgoing(&tx(TransactionKind::Withdraw, None, None), 3));
    }

    #[test]
    fn test_deposits_are_incoming() {
        assert!(!is_outgoing(&tx(TransactionKind::Deposit, None, None), 3));
    }

    #[test]
    fn test_transfer_sign_depends_on_displayed_side() {
        let transfer = tx(TransactionKind::Transfer, Some(3), Some(4));
        assert!(is_outgoing(&transfer, 3));
        assert!(!is_outgoing(&transfer, 4));
    }

    #[test]
    fn test_transfer_without_refs_renders_incoming() {
        assert!(!is_outgoing(&tx(TransactionKind::Transfer, None, None), 3));
    }

    #[test]
    fn test_timestamp_display() {
        assert_eq!(format_timestamp("2025-04-02T10:30:45"), "2025-04-02 10:30");
        assert_eq!(format_timestamp("2025-04-02"), "2025-04-02");
    }
}
