//! # API crate — backend client for the SecureBank frontend
//!
//! Everything the views need to talk to the banking backend lives here, with
//! no UI dependency so the whole crate tests on the native host.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one configured HTTP client with the backend base URL, a bearer-token interceptor, and the grouped auth / account / transaction calls |
//! | [`error`] | [`ApiError`]: network, decode, and backend-rejection errors, with the backend's `detail` message extracted for display |
//! | [`models`] | Request and response bodies mirrored from the backend DTOs |
//! | [`storage`] | Persisted key-value state (token, serialized user, selected currency) — localStorage on wasm, in-memory on native |

pub mod client;
pub mod error;
pub mod models;
pub mod storage;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Account, AccountType, ChangePasswordRequest, CreateAccountRequest, LoginRequest,
    RegisterRequest, TokenResponse, Transaction, TransactionKind, UserInfo,
};
