//! # Stockroom API
//!
//! HTTP server for the Stockroom inventory backend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        REST API Server                              │
//! │                                                                     │
//! │  Client ───► axum (8080) ───► handlers ───► stockroom-db ─► SQLite  │
//! │                 │                                                   │
//! │                 ├── require_auth middleware (JWT access tokens)     │
//! │                 └── /assets static files (product images)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_PORT` - HTTP server port (default: 8080)
//! - `DATABASE_PATH` - SQLite file path (default: ./data/stockroom.db)
//! - `ASSETS_DIR` - static image directory (default: ./assets)
//! - `JWT_SECRET` - secret for JWT signing
//! - `JWT_ACCESS_LIFETIME_SECS` - access token lifetime (default: 3600)
//! - `JWT_REFRESH_LIFETIME_SECS` - refresh token lifetime (default: 604800)

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod password;
pub mod routes;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
