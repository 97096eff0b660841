//! Error types for the shortener
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Shortener Error Enum ==
/// Unified error type for the shortener.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortenerError {
    /// Alias is not exactly one letter
    #[error("`alias` can only be a single letter.")]
    InvalidAlias,

    /// Submitted URL is empty or not an absolute URL
    #[error("{0}")]
    InvalidUrl(String),

    /// Key is unknown or its entry has expired
    #[error("Redirect URL not found or already expired.")]
    NotFound,

    /// Key derivation was asked for a length the digest cannot supply
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ShortenerError {
    /// Error for a missing, empty or whitespace-only URL.
    pub fn empty_url() -> Self {
        ShortenerError::InvalidUrl("`url` cannot be null or empty.".to_string())
    }

    /// Error for a URL that does not parse as an absolute URL.
    pub fn malformed_url() -> Self {
        ShortenerError::InvalidUrl("`url` is not a valid URL.".to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ShortenerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ShortenerError::InvalidAlias | ShortenerError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            ShortenerError::NotFound => StatusCode::NOT_FOUND,
            ShortenerError::InvalidArgument(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the shortener.
pub type Result<T> = std::result::Result<T, ShortenerError>;
