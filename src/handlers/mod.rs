//! HTTP request handlers for the Digital Twin API

use crate::config::Config;
use crate::error::AppResult;
use crate::middleware::request_id_middleware;
use crate::model::{ChatModel, OllamaClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod extractor;
pub mod generate;
pub mod status;

pub use extractor::ApiJson;

/// Application state shared across all handlers
///
/// Holds the chat model client behind an Arc for cheap cloning across Axum
/// handlers; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    model: Arc<dyn ChatModel>,
}

impl AppState {
    /// Create a new AppState backed by an Ollama client
    pub fn new(config: Arc<Config>) -> AppResult<Self> {
        let model = Arc::new(OllamaClient::new(&config.model)?);
        Ok(Self { model })
    }

    /// Create an AppState with an explicit model implementation
    ///
    /// Used by tests to substitute a scripted model.
    pub fn with_model(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Get reference to the chat model client
    pub fn model(&self) -> &dyn ChatModel {
        self.model.as_ref()
    }
}

/// Build the service router with all routes and middleware attached
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/digital-twin", get(status::status_handler))
        .route("/api/digital-twin/health", get(status::health_handler))
        .route(
            "/api/digital-twin/ai/generate",
            post(generate::generate_handler),
        )
        .route(
            "/api/digital-twin/ai/generateStream",
            post(generate::generate_stream_handler),
        )
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
