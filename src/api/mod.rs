//! API Module
//!
//! HTTP handlers and routing for the shortener REST API.
//!
//! # Endpoints
//! - `POST /shorten` - Create a short link from form fields `alias` and `url`
//! - `GET /:alias/:key` - Redirect to the link's target
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
