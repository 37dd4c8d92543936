// src/server/routes.rs
//! Axum router configuration for the cookbook server

use crate::server::handlers::{entries, parse, stats, summary};
use crate::server::ServerState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// `cors_origins` lists the allowed CORS origins; empty allows any origin.
pub fn create_router(state: Arc<RwLock<ServerState>>, cors_origins: &[String]) -> Router {
    let cors = cors_layer(cors_origins);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Cookbook endpoints
        .route("/entry", post(entries::create_entry))
        .route("/summary", get(summary::get_summary))
        .route("/parse", post(parse::parse_name))
        // Admin endpoints
        .route("/stats", get(stats::get_stats))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Build the CORS layer; no configured origins means any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = crate::server::ServerConfig::default();
        let origins = config.cors_allowed_origins.clone();
        let state = Arc::new(RwLock::new(crate::server::ServerState::new(config)));
        create_router(state, &origins)
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = test_router()
            .oneshot(Request::builder().uri("/recipes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_cors_layer_accepts_origins() {
        // Builds with valid, invalid and empty origin lists
        let _ = cors_layer(&[]);
        let _ = cors_layer(&["http://localhost:3000".to_string()]);
        let _ = cors_layer(&["bad\norigin".to_string()]);
    }
}
