//! Request DTOs for the shortener API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Form body for the shorten operation (POST /shorten)
///
/// Both fields default to empty so that a missing field is reported as a
/// validation error instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortenRequest {
    /// Single-letter alias placed in the short URL's path
    #[serde(default)]
    pub alias: String,
    /// Target URL, possibly percent-encoded
    #[serde(default)]
    pub url: String,
}
