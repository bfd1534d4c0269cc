//! The configured HTTP client for the banking backend.
//!
//! One [`ApiClient`] is constructed by the composition root and shared via
//! context. Every outbound call goes through [`ApiClient::authorize`], which
//! reads the persisted token at send time and attaches it as a bearer
//! credential — the moral equivalent of a request interceptor.
//!
//! Calls are fire-once: no retries, no timeout override, no caching. The
//! caller decides how to react to a rejection.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    Account, ChangePasswordRequest, CreateAccountRequest, LoginRequest, RegisterRequest,
    TokenResponse, Transaction, UserInfo,
};
use crate::storage;

/// Backend base URL. Fixed host/port; change here if the backend moves.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.authorize(self.http.request(method, format!("{}{path}", self.base_url)))
    }

    /// Attach the persisted bearer token, if one is present. Token validity
    /// is not checked here; the backend rejects stale credentials.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match storage::token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    // --- auth ---

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(self.request(Method::POST, paths::LOGIN).json(&body))
            .await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<UserInfo, ApiError> {
        self.send(self.request(Method::POST, paths::REGISTER).json(body))
            .await
    }

    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.send(self.request(Method::GET, paths::ME)).await
    }

    pub async fn change_password(&self, body: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(self.request(Method::PUT, paths::CHANGE_PASSWORD).json(body))
            .await
            .map(|_| ())
    }

    // --- accounts ---

    pub async fn user_accounts(&self, user_id: i64) -> Result<Vec<Account>, ApiError> {
        self.send(self.request(Method::GET, &paths::user_accounts(user_id)))
            .await
    }

    pub async fn create_account(&self, body: &CreateAccountRequest) -> Result<Account, ApiError> {
        self.send(self.request(Method::POST, paths::CREATE_ACCOUNT).json(body))
            .await
    }

    pub async fn deposit(&self, account_id: i64, amount: f64) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(
            self.request(Method::POST, &paths::deposit(account_id))
                .query(&[("amount", amount)]),
        )
        .await
        .map(|_| ())
    }

    pub async fn withdraw(&self, account_id: i64, amount: f64) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(
            self.request(Method::POST, &paths::withdraw(account_id))
                .query(&[("amount", amount)]),
        )
        .await
        .map(|_| ())
    }

    pub async fn transfer(
        &self,
        from_account_id: i64,
        to_account_id: i64,
        amount: f64,
    ) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(
            self.request(Method::POST, &paths::transfer(from_account_id))
                .query(&[("to_account_id", to_account_id.to_string())])
                .query(&[("amount", amount)]),
        )
        .await
        .map(|_| ())
    }

    // --- transactions ---

    pub async fn account_transactions(&self, account_id: i64) -> Result<Vec<Transaction>, ApiError> {
        self.send(self.request(Method::GET, &paths::account_transactions(account_id)))
            .await
    }
}

/// Endpoint paths, kept separate so the wire surface is visible in one place.
pub mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/users/";
    pub const ME: &str = "/auth/me";
    pub const CHANGE_PASSWORD: &str = "/auth/change-password";
    pub const CREATE_ACCOUNT: &str = "/accounts/";

    pub fn user_accounts(user_id: i64) -> String {
        format!("/accounts/user/{user_id}")
    }

    pub fn deposit(account_id: i64) -> String {
        format!("/accounts/{account_id}/deposit")
    }

    pub fn withdraw(account_id: i64) -> String {
        format!("/accounts/{account_id}/withdraw")
    }

    pub fn transfer(from_account_id: i64) -> String {
        format!("/accounts/{from_account_id}/transfer")
    }

    pub fn account_transactions(account_id: i64) -> String {
        format!("/transactions/account/{account_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_backend_routes() {
        assert_eq!(paths::LOGIN, "/auth/login");
        assert_eq!(paths::REGISTER, "/users/");
        assert_eq!(paths::ME, "/auth/me");
        assert_eq!(paths::CHANGE_PASSWORD, "/auth/change-password");
        assert_eq!(paths::user_accounts(7), "/accounts/user/7");
        assert_eq!(paths::deposit(3), "/accounts/3/deposit");
        assert_eq!(paths::withdraw(3), "/accounts/3/withdraw");
        assert_eq!(paths::transfer(3), "/accounts/3/transfer");
        assert_eq!(paths::account_transactions(9), "/transactions/account/9");
    }

    #[test]
    fn test_client_keeps_configured_base_url() {
        let client = ApiClient::new("http://bank.example:9000");
        assert_eq!(client.base_url(), "http://bank.example:9000");
        assert_eq!(ApiClient::default().base_url(), DEFAULT_BASE_URL);
    }
}
