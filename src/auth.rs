//! Authentication
//!
//! Access-token storage and the app-wide auth context.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{self, ApiClient};
use crate::config::{ApiConfig, TOKEN_STORAGE_KEY};
use crate::error::ApiError;

pub const LOGIN_FAILED: &str = "Login failed";

/// Persistent storage for the access token
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token kept in the browser's `localStorage`
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageTokens {
    key: &'static str,
}

impl Default for LocalStorageTokens {
    fn default() -> Self {
        Self { key: TOKEN_STORAGE_KEY }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        local_storage()
            .and_then(|storage| storage.get_item(self.key).ok().flatten())
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        let result = local_storage().map(|storage| storage.set_item(self.key, token));
        report_storage_write("persist", result);
    }

    fn clear(&self) {
        let result = local_storage().map(|storage| storage.remove_item(self.key));
        report_storage_write("remove", result);
    }
}

/// Log a failed token write. `None` means storage was unavailable.
fn report_storage_write<E>(action: &str, result: Option<Result<(), E>>) -> bool {
    match result {
        Some(Ok(())) => true,
        Some(Err(_)) => {
            tracing::warn!("could not {} access token", action);
            false
        }
        None => {
            tracing::warn!("localStorage unavailable, could not {} access token", action);
            false
        }
    }
}

/// Message shown on the login page for a failed token request
pub fn login_error_message(err: &ApiError) -> String {
    err.detail().unwrap_or_else(|| LOGIN_FAILED.to_string())
}

/// Auth state provided via context. Authenticated means a token is stored.
#[derive(Clone)]
pub struct AuthContext {
    authenticated: RwSignal<bool>,
    config: ApiConfig,
    tokens: Arc<dyn TokenStore>,
}

impl AuthContext {
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let authenticated = RwSignal::new(tokens.load().is_some());
        Self {
            authenticated,
            config,
            tokens,
        }
    }

    /// Tracked auth flag
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Client carrying the currently stored token
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config.clone(), self.tokens.load())
    }

    /// Request a token and store it. Errors come back as display messages.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), String> {
        let client = ApiClient::new(self.config.clone(), None);
        match api::obtain_token(&client, username, password).await {
            Ok(pair) => {
                self.tokens.save(&pair.access);
                self.authenticated.try_set(true);
                tracing::info!(username, "signed in");
                Ok(())
            }
            Err(err) => {
                tracing::error!("login error: {}", err);
                Err(login_error_message(&err))
            }
        }
    }

    pub fn logout(&self) {
        self.tokens.clear();
        self.authenticated.set(false);
        tracing::info!("signed out");
    }
}

/// Get the auth context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
