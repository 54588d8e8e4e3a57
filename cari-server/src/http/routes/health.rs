//! Liveness endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Root response
#[derive(Serialize)]
pub struct RootResponse {
    pub status: &'static str,
}

/// Health check response; the service is up even without a database.
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub db_connected: bool,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse { status: "running" })
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        db_connected: state.db.is_connected().await,
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
