//! Request and response bodies mirrored from the backend DTOs.
//!
//! Timestamps stay as ISO-8601 strings: the client only displays them, and
//! strings cross the wasm boundary without a date dependency.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as returned by `/auth/me` and login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserInfo {
    /// Full name when both parts are set, falling back to the email address.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self.email.clone(),
        }
    }

    /// Preferred short greeting: first name, else email.
    pub fn greeting_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    pub fn label(self) -> &'static str {
        match self {
            AccountType::Checking => "Checking account",
            AccountType::Savings => "Savings account",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
        }
    }
}

/// A financial holding record. Balances are backend truth; the client never
/// derives or patches them locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub account_number: String,
    pub account_type: AccountType,
    pub balance: f64,
    pub overdraft_limit: f64,
    pub interest_rate: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Transfer,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdrawal",
            TransactionKind::Transfer => "Transfer",
        }
    }
}

/// An immutable record of a deposit, withdrawal, or transfer. The source and
/// destination references are only present on transfer rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub transaction_type: TransactionKind,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub from_account_id: Option<i64>,
    #[serde(default)]
    pub to_account_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateAccountRequest {
    pub user_id: i64,
    pub account_type: AccountType,
    pub overdraft_limit: f64,
    pub interest_rate: f64,
}

/// Successful login response: the bearer token plus the user it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserializes_backend_row() {
        let json = r#"{
            "id": 3,
            "user_id": 1,
            "account_number": "1234567890",
            "account_type": "savings",
            "balance": 250.5,
            "overdraft_limit": 0.0,
            "interest_rate": 1.25,
            "created_at": "2025-04-01T09:30:00"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Savings);
        assert_eq!(account.balance, 250.5);
    }

    #[test]
    fn test_transaction_without_transfer_refs() {
        let json = r#"{
            "id": 7,
            "account_id": 3,
            "transaction_type": "deposit",
            "amount": 50.0,
            "description": null,
            "created_at": "2025-04-02T10:00:00"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.transaction_type, TransactionKind::Deposit);
        assert_eq!(tx.from_account_id, None);
        assert_eq!(tx.to_account_id, None);
    }

    #[test]
    fn test_transaction_transfer_refs() {
        let json = r#"{
            "id": 8,
            "account_id": 3,
            "transaction_type": "transfer",
            "amount": 20.0,
            "description": "rent",
            "created_at": "2025-04-02T11:00:00",
            "from_account_id": 3,
            "to_account_id": 4
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.transaction_type, TransactionKind::Transfer);
        assert_eq!(tx.from_account_id, Some(3));
        assert_eq!(tx.to_account_id, Some(4));
    }

    #[test]
    fn test_create_account_serializes_lowercase_type() {
        let req = CreateAccountRequest {
            user_id: 1,
            account_type: AccountType::Checking,
            overdraft_limit: 100.0,
            interest_rate: 0.0,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["account_type"], "checking");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: 1,
            email: "jean@example.com".into(),
            first_name: Some("Jean".into()),
            last_name: None,
            phone: None,
            created_at: None,
        };
        assert_eq!(user.display_name(), "jean@example.com");
        assert_eq!(user.greeting_name(), "Jean");

        let full = UserInfo {
            first_name: Some("Jean".into()),
            last_name: Some("Dupont".into()),
            ..user
        };
        assert_eq!(full.display_name(), "Jean Dupont");
    }
}
