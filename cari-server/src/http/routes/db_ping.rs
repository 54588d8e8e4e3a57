//! Database reachability probe

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Ping response
#[derive(Serialize)]
pub struct PingResponse {
    pub ok: bool,
    pub result: i32,
}

/// GET /db-ping - 503 when no pool is installed or the query fails
async fn db_ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, ApiError> {
    let result = state.db.ping().await?;
    Ok(Json(PingResponse { ok: true, result }))
}

/// Ping routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/db-ping", get(db_ping))
}
