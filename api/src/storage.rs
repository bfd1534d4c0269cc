//! Persisted client-side key-value state: the auth token, the serialized
//! current user, and the selected currency code.
//!
//! On wasm this is the browser's localStorage. On native targets a
//! process-global in-memory map stands in, which keeps the state holders and
//! the test suite working on the host.

use crate::models::UserInfo;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const CURRENCY_KEY: &str = "selectedCurrency";

#[cfg(target_arch = "wasm32")]
mod backend {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub fn set_item(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(key, value) {
                tracing::warn!("failed to persist {key}: {err:?}");
            }
        }
    }

    pub fn remove_item(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    fn map() -> &'static Mutex<HashMap<String, String>> {
        static MAP: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        MAP.get_or_init(|| Mutex::new(HashMap::new()))
    }

    pub fn get_item(key: &str) -> Option<String> {
        map().lock().unwrap().get(key).cloned()
    }

    pub fn set_item(key: &str, value: &str) {
        map().lock().unwrap().insert(key.to_string(), value.to_string());
    }

    pub fn remove_item(key: &str) {
        map().lock().unwrap().remove(key);
    }
}

pub fn get_item(key: &str) -> Option<String> {
    backend::get_item(key)
}

pub fn set_item(key: &str, value: &str) {
    backend::set_item(key, value);
}

pub fn remove_item(key: &str) {
    backend::remove_item(key);
}

pub fn token() -> Option<String> {
    get_item(TOKEN_KEY)
}

pub fn save_token(token: &str) {
    set_item(TOKEN_KEY, token);
}

pub fn saved_user() -> Option<UserInfo> {
    let raw = get_item(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn save_user(user: &UserInfo) {
    match serde_json::to_string(user) {
        Ok(raw) => set_item(USER_KEY, &raw),
        Err(err) => tracing::warn!("failed to serialize user: {err}"),
    }
}

/// Drop the whole persisted session (token + user).
pub fn clear_session() {
    remove_item(TOKEN_KEY);
    remove_item(USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The native backend is process-global; serialize tests touching the
    // fixed session keys.
    static LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_get_remove_roundtrip() {
        set_item("test-key", "value");
        assert_eq!(get_item("test-key").as_deref(), Some("value"));
        remove_item("test-key");
        assert_eq!(get_item("test-key"), None);
    }

    #[test]
    fn test_user_helpers_serialize_roundtrip() {
        let _guard = LOCK.lock().unwrap();
        let user = UserInfo {
            id: 42,
            email: "a@b.c".into(),
            first_name: None,
            last_name: None,
            phone: None,
            created_at: Some("2025-01-01T00:00:00".into()),
        };
        save_user(&user);
        assert_eq!(saved_user(), Some(user));
        remove_item(USER_KEY);
    }

    #[test]
    fn test_clear_session_removes_token_and_user() {
        let _guard = LOCK.lock().unwrap();
        save_token("abc");
        set_item(USER_KEY, "{}");
        clear_session();
        assert_eq!(token(), None);
        assert_eq!(get_item(USER_KEY), None);
    }
}
