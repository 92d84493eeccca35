//! Error types for the Digital Twin Service
//!
//! All errors implement `IntoResponse` for Axum handlers, producing the
//! uniform JSON error envelope `{timestamp, status, error, message}`.
//!
//! Classification is deliberately coarse: `Validation` errors are reported
//! back to the caller verbatim with HTTP 400; every other variant maps to
//! HTTP 500 with a fixed generic message, and the underlying detail is kept
//! in server-side logs only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Generic message returned to callers for all non-validation failures.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Model request to {endpoint} failed: {reason}")]
    ModelRequestFailed { endpoint: String, reason: String },

    #[error("Model at {endpoint} returned status {status}: {body}")]
    ModelStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Malformed model response: {0}")]
    ModelResponseMalformed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error envelope returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: &'static str,
    pub message: String,
}

impl AppError {
    /// Status code and error label for this error's class
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, label) = self.classify();

        let message = match &self {
            Self::Validation(msg) => {
                tracing::warn!("Bad request: {}", msg);
                msg.clone()
            }
            other => {
                // Full detail stays server-side; callers only see the
                // generic message.
                tracing::error!(error = %other, "Unexpected error");
                GENERIC_ERROR_MESSAGE.to_string()
            }
        };

        let body = Json(ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: label,
            message,
        });

        (status, body).into_response()
    }
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_creates() {
        let err = AppError::Validation("invalid input".to_string());
        assert_eq!(err.to_string(), "Invalid request: invalid input");
    }

    #[test]
    fn model_request_failed_error_creates() {
        let err = AppError::ModelRequestFailed {
            endpoint: "http://localhost:11434".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Model request to http://localhost:11434 failed: connection refused"
        );
    }

    #[test]
    fn validation_error_response_status() {
        let err = AppError::Validation("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_response_status() {
        let err = AppError::Internal("unexpected state".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn config_error_response_status() {
        let err = AppError::Config("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn validation_envelope_carries_original_message() {
        let err = AppError::Validation("message must be a string".to_string());
        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Bad Request");
        assert_eq!(body["message"], "message must be a string");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn general_envelope_suppresses_detail() {
        let err = AppError::ModelStatus {
            endpoint: "http://localhost:11434".to_string(),
            status: 503,
            body: "model not loaded".to_string(),
        };
        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], 500);
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], GENERIC_ERROR_MESSAGE);
        assert!(
            !body["message"]
                .as_str()
                .unwrap()
                .contains("model not loaded")
        );
    }
}
