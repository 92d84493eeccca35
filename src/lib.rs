//! Digital Twin Service - HTTP gateway to a locally hosted chat model
//!
//! Forwards user messages to an Ollama chat endpoint and returns either a
//! single completion or a token-by-token streamed completion (SSE).

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod telemetry;
