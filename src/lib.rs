//! URL Shortener - short links backed by an expiring in-memory cache
//!
//! Turns a long URL and a one-letter alias into a short redirect URL that
//! resolves for sixty minutes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod shortener;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ShortenerError};
pub use shortener::RedirectService;
pub use tasks::spawn_cleanup_task;
