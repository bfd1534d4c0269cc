//! Authentication context and hooks for the UI.

use api::{storage, ApiClient, ApiError, UserInfo};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True while the persisted token is still being resolved; route guards
    /// must treat the session as indeterminate until this clears.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// On mount, a persisted token is resolved against `/auth/me`. A token the
/// backend no longer accepts is cleared and the session treated as logged
/// out, so the user is never left stuck on the loading screen.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = crate::use_api();
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            if storage::token().is_none() {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
                return;
            }
            match client.current_user().await {
                Ok(user) => {
                    storage::save_user(&user);
                    auth_state.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                }
                Err(err) => {
                    tracing::warn!("persisted token rejected, clearing session: {err}");
                    storage::clear_session();
                    auth_state.set(AuthState {
                        user: None,
                        loading: false,
                    });
                }
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Authenticate against the backend, persist the returned token, and resolve
/// the user profile into the session state.
pub async fn log_in(
    client: &ApiClient,
    mut auth: Signal<AuthState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let token = client.login(email, password).await?;
    storage::save_token(&token.access_token);

    match client.current_user().await {
        Ok(user) => {
            storage::save_user(&user);
            auth.set(AuthState {
                user: Some(user),
                loading: false,
            });
            Ok(())
        }
        Err(err) => {
            storage::clear_session();
            Err(err)
        }
    }
}

/// Clear the persisted token and the in-memory user. No server round-trip.
pub fn log_out(mut auth: Signal<AuthState>) {
    storage::clear_session();
    auth.set(AuthState {
        user: None,
        loading: false,
    });
}
