//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state
//! extraction. Everything here is immutable after startup and cheap to
//! clone across async tasks.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::services::AuthService;
use crate::store::UserStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Authentication service with pre-computed signing keys
    pub auth: AuthService,
}

impl AppState {
    /// Create a new application state
    ///
    /// Derives the JWT keys from the configured secret once; call this at
    /// startup only.
    pub fn new(store: Arc<dyn UserStore>, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret);
        let auth = AuthService::new(store, jwt);

        Self {
            config: Arc::new(config),
            auth,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the authentication service
    #[inline]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }
}
