// src/server/mod.rs
//! Cookbook HTTP server
//!
//! This module provides an HTTP server that:
//! - Accepts new ingredients and recipes (`POST /entry`)
//! - Summarizes recipes into base ingredients and cook time (`GET /summary`)
//! - Normalizes handwritten recipe names (`POST /parse`)
//! - Reports request counters (`GET /stats`)
//!
//! The cookbook lives in memory for the lifetime of the process. It can be
//! seeded from a JSON file at startup.

pub mod config;
mod handlers;
pub mod metrics;
mod routes;

pub use config::CookbookConfig;
pub use metrics::{MetricsSnapshot, ServerMetrics};
pub use routes::create_router;

use crate::catalog::Cookbook;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// CORS allowed origins (empty = any origin)
    pub cors_allowed_origins: Vec<String>,
    /// JSON seed file loaded into the cookbook at startup
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allowed_origins: Vec::new(),
            seed_path: None,
        }
    }
}

/// Shared server state
///
/// Handlers take the write lock to add entries and the read lock for
/// everything else, so creation is serialized and summaries run in parallel.
pub struct ServerState {
    pub config: ServerConfig,
    pub cookbook: Cookbook,
    pub metrics: ServerMetrics,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_cookbook(config, Cookbook::new())
    }

    /// Create state around an existing cookbook
    pub fn with_cookbook(config: ServerConfig, cookbook: Cookbook) -> Self {
        Self {
            config,
            cookbook,
            metrics: ServerMetrics::new(),
        }
    }
}

/// Build the server state, loading the seed file if one is configured
pub fn load_state(config: ServerConfig) -> Result<ServerState> {
    let cookbook = match &config.seed_path {
        Some(path) => Cookbook::from_seed_file(path)
            .with_context(|| format!("Failed to seed cookbook from {}", path.display()))?,
        None => Cookbook::new(),
    };
    Ok(ServerState::with_cookbook(config, cookbook))
}

/// Start the cookbook server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting cookbook server on {}", config.bind_addr);
    if let Some(ref seed) = config.seed_path {
        tracing::info!("Seed file: {:?}", seed);
    }

    let bind_addr = config.bind_addr;
    let cors_origins = config.cors_allowed_origins.clone();
    let state = load_state(config)?;
    tracing::info!("Cookbook holds {} entries", state.cookbook.len());

    let app = create_router(Arc::new(RwLock::new(state)), &cors_origins);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("Cookbook is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
