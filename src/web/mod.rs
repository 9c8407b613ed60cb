// file: src/web/mod.rs
// description: http front end wiring shared state to routes
// reference: https://docs.rs/axum

pub mod error;
pub mod handlers;
pub mod views;

use crate::analyzer::ClaimAnalyzer;
use crate::config::{Config, PolicyConfig};
use crate::error::{ClaimDeskError, Result};
use crate::history::HistoryStore;
use crate::loader::PolicyLibrary;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// State shared by every handler. Each component guards its own data.
#[derive(Clone)]
pub struct AppState {
    pub policies: PolicyLibrary,
    pub analyzer: ClaimAnalyzer,
    pub history: HistoryStore,
    pub policy_config: PolicyConfig,
    pub recent_limit: usize,
}

impl AppState {
    pub fn new(config: &Config, policies: PolicyLibrary, analyzer: ClaimAnalyzer) -> Self {
        Self {
            policies,
            analyzer,
            history: HistoryStore::new(&config.history),
            policy_config: config.policies.clone(),
            recent_limit: config.history.recent_limit,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_page).post(handlers::index_submit))
        .route("/history", get(handlers::history_page))
        .route("/api/history", get(handlers::api_history))
        .route("/api/history/:id", get(handlers::api_history_item))
        .route("/api/clear_history", post(handlers::api_clear_history))
        .route("/api/policies", get(handlers::api_policies))
        .route("/api/reload_policies", post(handlers::api_reload_policies))
        .route("/health", get(handlers::health))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClaimDeskError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
