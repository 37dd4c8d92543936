// src/server/handlers/entries.rs
//! Entry creation handler

use crate::catalog::NewEntry;
use crate::server::ServerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Add an ingredient or recipe to the cookbook
///
/// POST /entry
///
/// Validation and insertion happen under one write lock, so two requests
/// racing for the same name cannot both succeed.
pub async fn create_entry(
    State(state): State<Arc<RwLock<ServerState>>>,
    Json(request): Json<NewEntry>,
) -> Response {
    let name = request.name.clone();
    let kind = request.kind.clone();

    let mut state = state.write().await;
    match state.cookbook.add_entry(request) {
        Ok(()) => {
            state.metrics.record_entry_created();
            info!("Created {} '{}'", kind, name);
            (StatusCode::OK, Json(serde_json::json!({}))).into_response()
        }
        Err(e) => {
            state.metrics.record_entry_rejected();
            warn!("Rejected entry '{}': {}", name, e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
