// src/server/handlers/parse.rs
//! Handwritten recipe name normalization handler

use crate::name::normalize_name;
use crate::server::ServerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Normalize a handwritten recipe name
///
/// POST /parse
pub async fn parse_name(
    State(state): State<Arc<RwLock<ServerState>>>,
    Json(request): Json<ParseRequest>,
) -> Response {
    let state = state.read().await;
    match normalize_name(&request.input) {
        Some(msg) => {
            state.metrics.record_name_parsed();
            (StatusCode::OK, Json(ParseResponse { msg })).into_response()
        }
        None => {
            state.metrics.record_name_rejected();
            (StatusCode::BAD_REQUEST, "Invalid recipe name").into_response()
        }
    }
}
