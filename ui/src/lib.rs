//! This crate contains all shared UI for the workspace: the session and
//! currency state holders, toast notifications, form validation, and the
//! account/transaction panels the dashboard composes.

use dioxus::prelude::*;

use api::ApiClient;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{log_in, log_out, use_auth, AuthProvider, AuthState};

mod currency;
pub use currency::{
    currency_symbol, exchange_rate, format_currency, set_currency, use_currency, CurrencyProvider,
    CurrencyState, DEFAULT_CURRENCY, SUPPORTED_CURRENCIES,
};

mod toast;
pub use toast::{show_error, show_success, use_toasts, Toast, ToastHost, ToastLevel, ToastProvider};

pub mod validate;

mod modal;
pub use modal::ModalOverlay;

mod navbar;
pub use navbar::Navbar;

mod accounts;
pub use accounts::AccountsPanel;

mod transactions;
pub use transactions::TransactionsPanel;

/// The shared backend client, provided once by the composition root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
