//! Authentication State
//!
//! Client-side auth flag used to gate routes. The token comes from the
//! `/token` endpoint and is kept in localStorage so a reload stays logged
//! in; there is no refresh or expiry handling.

use leptos::*;

/// localStorage key for the access token
const TOKEN_STORAGE_KEY: &str = "agent_token";

/// Auth context provided to all components
#[derive(Clone, Copy)]
pub struct AuthState {
    pub token: RwSignal<Option<String>>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Store the access token after a successful login
    pub fn log_in(&self, token: String) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, &token);
            }
        }
        self.token.set(Some(token));
    }

    /// Drop the token and fall back to the login screen
    pub fn log_out(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
        self.token.set(None);
    }
}

/// Provide auth state, restoring any stored token
pub fn provide_auth_state() {
    let state = AuthState {
        token: create_rw_signal(load_token()),
    };

    provide_context(state);
}

fn load_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}
