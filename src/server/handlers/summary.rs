// src/server/handlers/summary.rs
//! Recipe summary handler

use crate::server::ServerState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Query parameters for `GET /summary`
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

/// Summarize a recipe into base ingredients and total cook time
///
/// GET /summary?name=<name>
pub async fn get_summary(
    State(state): State<Arc<RwLock<ServerState>>>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let state = state.read().await;

    let Some(name) = query.name else {
        state.metrics.record_summary_failed();
        return (StatusCode::BAD_REQUEST, "Missing query parameter: name").into_response();
    };

    match state.cookbook.summary(&name) {
        Ok(summary) => {
            state.metrics.record_summary_served();
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(e) => {
            state.metrics.record_summary_failed();
            debug!("Summary for '{}' failed: {}", name, e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
