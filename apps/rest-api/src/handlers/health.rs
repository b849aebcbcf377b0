//! Health probe.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// `GET /healthz`
///
/// Reports process liveness and database reachability. Returns 503 when
/// the database cannot execute a query.
pub async fn healthz(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let db_ok = state.db.health_check().await;

    let status = if db_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(json!({ "ok": db_ok, "service": "stockroom-api" })))
}
