// src/server/handlers/stats.rs
//! Server statistics handler

use crate::server::ServerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Report request counters and catalog size
///
/// GET /stats
pub async fn get_stats(State(state): State<Arc<RwLock<ServerState>>>) -> Response {
    let state = state.read().await;
    let snapshot = state.metrics.snapshot(state.cookbook.len());
    (StatusCode::OK, Json(snapshot)).into_response()
}
