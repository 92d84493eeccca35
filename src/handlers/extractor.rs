//! Custom JSON extractor producing the uniform error envelope
//!
//! Wraps Axum's `Json` extractor so that body-deserialization failures are
//! reported through `AppError::Validation`. Without this, rejections would
//! bypass the error translator and return Axum's plain-text bodies.

use crate::error::AppError;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is an [`AppError::Validation`]
///
/// Use this instead of `axum::Json` in handlers so malformed request bodies
/// produce the `{timestamp, status, error, message}` envelope with HTTP 400.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
