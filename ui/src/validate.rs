//! Client-side form validation. Every mutating form runs these checks before
//! issuing a network call; a failed check blocks submission entirely.

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    Ok(())
}

pub struct RegisterForm<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

pub fn validate_register(form: &RegisterForm<'_>) -> Result<(), String> {
    if form.first_name.trim().is_empty()
        || form.last_name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
    {
        return Err("Please fill in all required fields".to_string());
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match".to_string());
    }
    if form.password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must contain at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

pub fn validate_change_password(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), String> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if new != confirm {
        return Err("Passwords do not match".to_string());
    }
    if new.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must contain at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

/// Parse a user-entered amount: must be a finite number strictly above zero.
pub fn parse_amount(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Please enter an amount".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err("Amount must be a positive number".to_string()),
    }
}

/// Parse a non-negative numeric field such as an overdraft limit or rate.
pub fn parse_non_negative(raw: &str, label: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(format!("{label} must be a non-negative number")),
    }
}

/// Parse the destination account id for a transfer.
pub fn parse_account_id(raw: &str) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Please enter a valid destination account id".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form<'a>(password: &'a str, confirm: &'a str) -> RegisterForm<'a> {
        RegisterForm {
            first_name: "Jean",
            last_name: "Dupont",
            email: "jean@example.com",
            password,
            confirm_password: confirm,
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login("", "secret").is_err());
        assert!(validate_login("a@b.c", "").is_err());
        assert!(validate_login("  ", "secret").is_err());
        assert!(validate_login("a@b.c", "secret").is_ok());
    }

    #[test]
    fn test_register_rejects_mismatched_passwords() {
        assert!(validate_register(&register_form("secret1", "secret2")).is_err());
        assert!(validate_register(&register_form("secret1", "secret1")).is_ok());
    }

    #[test]
    fn test_register_rejects_short_password() {
        assert!(validate_register(&register_form("abc", "abc")).is_err());
    }

    #[test]
    fn test_register_rejects_missing_fields() {
        let form = RegisterForm {
            first_name: "",
            last_name: "Dupont",
            email: "jean@example.com",
            password: "secret1",
            confirm_password: "secret1",
        };
        assert!(validate_register(&form).is_err());
    }

    #[test]
    fn test_change_password_mismatch_blocks() {
        assert!(validate_change_password("old", "newpass", "other").is_err());
    }

    #[test]
    fn test_change_password_minimum_length() {
        assert!(validate_change_password("old", "short", "short").is_err());
        assert!(validate_change_password("old", "longenough", "longenough").is_ok());
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("NaN").is_err());
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount(" 12.34 "), Ok(12.34));
    }

    #[test]
    fn test_non_negative_defaults_empty_to_zero() {
        assert_eq!(parse_non_negative("", "Overdraft limit"), Ok(0.0));
        assert_eq!(parse_non_negative("100", "Overdraft limit"), Ok(100.0));
        assert!(parse_non_negative("-1", "Overdraft limit").is_err());
    }

    #[test]
    fn test_account_id_parsing() {
        assert_eq!(parse_account_id("42"), Ok(42));
        assert!(parse_account_id("0").is_err());
        assert!(parse_account_id("abc").is_err());
    }
}
