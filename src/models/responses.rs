//! Response DTOs for the shortener API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};

use crate::shortener::ShortLink;

/// Response body for the shorten operation (POST /shorten)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShortenResponse {
    /// Full redirect URL
    pub short_url: String,
    /// Instant the link stops resolving
    pub expiration: DateTime<Utc>,
    /// Lifetime of the link, rendered as `HH:MM:SS`
    #[serde(serialize_with = "serialize_lifespan")]
    pub lifespan: Duration,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_url: link.short_url,
            expiration: link.expiration,
            lifespan: link.lifespan,
        }
    }
}

fn serialize_lifespan<S: Serializer>(lifespan: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_lifespan(lifespan))
}

/// Formats a duration as `HH:MM:SS`, hours not wrapping at 24.
pub fn format_lifespan(lifespan: &Duration) -> String {
    let total = lifespan.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
