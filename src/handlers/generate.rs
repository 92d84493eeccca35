//! Generation endpoints
//!
//! Handles POST /api/digital-twin/ai/generate and /ai/generateStream.
//! Both endpoints resolve a missing or blank message to a fixed default
//! prompt before delegating to the chat model client.

use crate::error::AppError;
use crate::handlers::{ApiJson, AppState};
use crate::middleware::RequestId;
use axum::{
    Extension, Json,
    extract::State,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prompt used when the client sends no message (or only whitespace)
pub const DEFAULT_PROMPT: &str = "Tell me a joke";

/// Chat request from client
///
/// The message is optional; absence, an explicit null, and a blank string
/// are all treated the same.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

impl ChatRequest {
    /// Resolve the message to forward to the model
    ///
    /// Blank input (null, empty, or whitespace-only) becomes
    /// [`DEFAULT_PROMPT`]; anything else passes through verbatim, with no
    /// trimming.
    pub fn resolve_message(self) -> String {
        match self.message {
            Some(message) if !message.trim().is_empty() => message,
            _ => DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Single-shot generation response
#[derive(Debug, Serialize)]
pub struct ChatGenerationResponse {
    pub generation: String,
}

/// POST /api/digital-twin/ai/generate handler
///
/// Delegates to the model's single-response call and wraps the returned
/// text. Failures propagate to the error translator; no local recovery.
pub async fn generate_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatGenerationResponse>, AppError> {
    let message = request.resolve_message();

    tracing::debug!(
        request_id = %request_id,
        message_length = message.len(),
        "Received generate request"
    );

    let generation = state.model().call(&message).await?;

    Ok(Json(ChatGenerationResponse { generation }))
}

/// POST /api/digital-twin/ai/generateStream handler
///
/// Subscribes to the model's streaming call and forwards each non-empty
/// text delta as an SSE event. Empty deltas are filtered out; stream-level
/// errors after the first byte are logged and skipped, since the SSE
/// response status has already been committed. Backpressure and client
/// disconnects are handled by the transport.
pub async fn generate_stream_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Response, AppError> {
    let message = request.resolve_message();

    tracing::debug!(
        request_id = %request_id,
        message_length = message.len(),
        "Received streaming generate request"
    );

    let deltas = state.model().stream(&message).await?;

    let events = deltas.filter_map(move |item| async move {
        match item {
            Ok(text) if text.is_empty() => None,
            Ok(text) => Some(Ok::<_, std::convert::Infallible>(Event::default().data(text))),
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    error = %e,
                    "Stream error during generation"
                );
                None
            }
        }
    });

    // Default keep-alive comment only; a custom text with newlines would be
    // rejected by the SSE event builder.
    Ok(Sse::new(events)
        .keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
        .into_response())
}
