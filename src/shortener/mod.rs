//! Shortener Module
//!
//! Key derivation and the service that turns URLs into expiring short links.

pub mod key;
pub mod service;

pub use key::{derive_key, derive_key_with, DEFAULT_KEY_LENGTH, HEX_DIGEST_LENGTH};
pub use service::{link_lifespan, RedirectService, ShortLink, LINK_LIFESPAN_MINUTES};
