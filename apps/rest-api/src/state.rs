//! Shared application state.
//!
//! One `Arc<AppState>` is built at startup and handed to the router;
//! handlers and middleware borrow what they need from it.

use crate::auth::JwtManager;
use crate::config::ApiConfig;
use stockroom_db::Database;

/// Shared application state.
pub struct AppState {
    /// Database handle (internally pooled, cheap to clone).
    pub db: Database,

    /// JWT issuance and validation.
    pub jwt: JwtManager,

    /// Loaded configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Builds state from a loaded configuration and a connected database.
    pub fn new(config: ApiConfig, db: Database) -> Self {
        let jwt = JwtManager::new(
            config.jwt_secret.clone(),
            config.jwt_access_lifetime_secs,
            config.jwt_refresh_lifetime_secs,
        );

        AppState { db, jwt, config }
    }
}
