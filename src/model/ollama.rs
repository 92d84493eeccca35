//! Ollama chat client
//!
//! Talks to the `/api/chat` endpoint of a locally hosted Ollama instance.
//! Non-streaming calls return the assistant message content; streaming calls
//! parse Ollama's newline-delimited JSON body into a stream of text deltas.

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};
use crate::model::ChatModel;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reqwest-backed client for a single configured Ollama model
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
    options: GenerationOptions,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationOptions {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

impl OllamaClient {
    /// Create a client from the model section of the configuration
    pub fn new(config: &ModelConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds()))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            model: config.name().to_string(),
            temperature: config.temperature(),
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    fn payload<'a>(&'a self, message: &'a str, stream: bool) -> ChatPayload<'a> {
        ChatPayload {
            model: &self.model,
            messages: vec![WireMessage {
                role: "user",
                content: message,
            }],
            stream,
            options: GenerationOptions {
                temperature: self.temperature,
            },
        }
    }

    async fn send(&self, message: &str, stream: bool) -> AppResult<reqwest::Response> {
        let response = self
            .http
            .post(self.chat_url())
            .json(&self.payload(message, stream))
            .send()
            .await
            .map_err(|e| AppError::ModelRequestFailed {
                endpoint: self.base_url.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ModelStatus {
                endpoint: self.base_url.clone(),
                status,
                body,
            });
        }

        Ok(response)
    }
}

/// Parse one line of Ollama's streaming body into its text delta
///
/// Lines without an assistant message (the final `done` marker included)
/// yield an empty delta.
fn parse_chunk(line: &str) -> AppResult<String> {
    let reply: ChatReply = serde_json::from_str(line)
        .map_err(|e| AppError::ModelResponseMalformed(format!("{}: {}", e, line)))?;
    Ok(reply.message.map(|m| m.content).unwrap_or_default())
}

/// Accumulates transport chunks and parses complete NDJSON lines
///
/// Transport chunks split on byte boundaries, which can land inside a
/// multi-byte UTF-8 codepoint. Bytes are buffered raw and decoded only once
/// a full line is available, so split codepoints are reassembled intact.
#[derive(Default)]
struct LineBuffer {
    buffer: Vec<u8>,
}

impl LineBuffer {
    fn push(&mut self, bytes: &[u8]) -> Vec<AppResult<String>> {
        self.buffer.extend_from_slice(bytes);
        let mut parsed = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            match std::str::from_utf8(&line) {
                Ok(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        parsed.push(parse_chunk(text));
                    }
                }
                Err(e) => parsed.push(Err(AppError::ModelResponseMalformed(format!(
                    "invalid UTF-8 in stream: {}",
                    e
                )))),
            }
        }
        parsed
    }
}

#[async_trait]
impl ChatModel for OllamaClient {
    async fn call(&self, message: &str) -> AppResult<String> {
        let response = self.send(message, false).await?;

        let reply: ChatReply =
            response
                .json()
                .await
                .map_err(|e| AppError::ModelResponseMalformed(e.to_string()))?;

        Ok(reply.message.map(|m| m.content).unwrap_or_default())
    }

    async fn stream(&self, message: &str) -> AppResult<BoxStream<'static, AppResult<String>>> {
        let response = self.send(message, true).await?;
        let endpoint = self.base_url.clone();

        // Ollama streams one JSON object per line. Partial lines (and split
        // codepoints) are buffered until the next newline arrives.
        let deltas = response
            .bytes_stream()
            .scan(LineBuffer::default(), move |buffer, chunk| {
                let items = match chunk {
                    Ok(bytes) => buffer.push(&bytes),
                    Err(e) => vec![Err(AppError::ModelRequestFailed {
                        endpoint: endpoint.clone(),
                        reason: e.to_string(),
                    })],
                };
                futures::future::ready(Some(stream::iter(items)))
            })
            .flatten()
            .boxed();

        Ok(deltas)
    }
}
