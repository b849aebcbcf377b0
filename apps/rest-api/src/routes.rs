//! Route definitions for the REST API.
//!
//! ## Route Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Public                                                             │
//! │    GET    /healthz                      liveness + DB check         │
//! │    POST   /api/auth/register            create account              │
//! │    POST   /api/auth/login               issue token pair            │
//! │    POST   /api/auth/refresh             exchange refresh token      │
//! │    GET    /api/products                 list catalog                │
//! │    GET    /assets/{file}                static product images       │
//! │                                                                     │
//! │  Bearer token required (admin for mutations)                        │
//! │    GET    /api/auth/me                  current account             │
//! │    POST   /api/auth/logout              acknowledgment              │
//! │    POST   /api/products                 create product              │
//! │    PUT    /api/products/{id}            partial update              │
//! │    PUT    /api/products/{id}/stock      absolute stock set          │
//! │    DELETE /api/products/{id}            delete product              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, health, products};
use crate::middleware::require_auth;
use crate::state::AppState;

/// Builds the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Browser frontends live on other origins; tokens travel in headers,
    // not cookies, so the permissive policy carries no credentials.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/products", get(products::list_products));

    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/products", post(products::create_product))
        .route(
            "/api/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/api/products/{id}/stock", put(products::update_stock))
        .layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .nest_service("/assets", ServeDir::new(&state.config.assets_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
