//! Chat model client
//!
//! The service treats the model runtime as an opaque collaborator behind the
//! [`ChatModel`] trait: a synchronous-style call returning the full
//! completion, and a streaming call yielding text deltas in generation
//! order. The production implementation talks to an Ollama chat endpoint.

use crate::error::AppResult;
use async_trait::async_trait;
use futures::stream::BoxStream;

mod ollama;

pub use ollama::OllamaClient;

/// Abstraction over a chat-completion backend
///
/// Streamed deltas are yielded exactly as the backend produced them; empty
/// deltas are not filtered here (the SSE handler decides what to emit).
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a prompt and return the complete generated text.
    async fn call(&self, message: &str) -> AppResult<String>;

    /// Send a prompt and return a stream of text deltas.
    ///
    /// The stream is finite and non-restartable; it ends when the backend
    /// signals completion or the connection closes.
    async fn stream(&self, message: &str) -> AppResult<BoxStream<'static, AppResult<String>>>;
}
