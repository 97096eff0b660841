//! API Handlers
//!
//! HTTP request handlers for each shortener endpoint.

use std::sync::Arc;

use axum::{
    extract::{Host, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use tokio::sync::RwLock;

use crate::cache::{Clock, ExpiringCache, SystemClock};
use crate::error::Result;
use crate::models::{HealthResponse, ShortenRequest, ShortenResponse};
use crate::shortener::RedirectService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shortening and lookup over the shared cache
    pub service: RedirectService,
    /// Fixed public prefix for short links; the request host is used when unset
    pub base_url: Option<String>,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: RedirectService, base_url: Option<String>) -> Self {
        Self { service, base_url }
    }

    /// Builds a fresh cache and service on `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>, base_url: Option<String>) -> Self {
        let cache = Arc::new(RwLock::new(ExpiringCache::new(clock)));
        Self::new(RedirectService::new(cache), base_url)
    }

    /// Creates a new AppState from configuration, on the system clock.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::with_clock(Arc::new(SystemClock), config.base_url.clone())
    }

    /// Prefix for short links served to a request addressed to `host`.
    fn base_url_for(&self, host: Option<&str>) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => format!("http://{}", host.unwrap_or("localhost")),
        }
    }
}

/// Handler for POST /shorten
///
/// Accepts form fields `alias` and `url` and returns the new short link.
pub async fn shorten_handler(
    State(state): State<AppState>,
    host: Option<Host>,
    Form(req): Form<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    let base_url = state.base_url_for(host.as_ref().map(|Host(h)| h.as_str()));
    let link = state.service.shorten(&req.alias, &req.url, &base_url).await?;

    Ok(Json(link.into()))
}

/// Handler for GET /:alias/:key
///
/// Redirects to the stored target. The alias segment is not consulted.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path((_alias, key)): Path<(String, String)>,
) -> Result<Response> {
    let target = state.service.resolve(&key).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
