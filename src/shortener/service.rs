//! Redirect Service
//!
//! Validates shorten requests, stores targets, and resolves keys back to them.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use crate::cache::ExpiringCache;
use crate::error::{Result, ShortenerError};
use crate::shortener::key::{derive_key, DEFAULT_KEY_LENGTH};

/// Minutes every short link stays resolvable.
pub const LINK_LIFESPAN_MINUTES: i64 = 60;

/// Lifetime granted to every short link.
pub fn link_lifespan() -> Duration {
    Duration::minutes(LINK_LIFESPAN_MINUTES)
}

// == Short Link ==
/// Result of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    /// Full public redirect URL: `{base}/{alias}/{key}`
    pub short_url: String,
    /// The generated lookup key
    pub key: String,
    /// Canonical form of the submitted target
    pub target: String,
    /// Instant the link stops resolving
    pub expiration: DateTime<Utc>,
    /// Lifetime granted to the link
    pub lifespan: Duration,
}

// == Redirect Service ==
/// Shortens URLs into the shared cache and resolves keys out of it.
#[derive(Clone)]
pub struct RedirectService {
    cache: Arc<RwLock<ExpiringCache>>,
}

impl RedirectService {
    /// Creates a service over `cache`. Expiry times come from the cache's clock.
    pub fn new(cache: Arc<RwLock<ExpiringCache>>) -> Self {
        Self { cache }
    }

    /// Handle to the underlying cache, shared with the purge task.
    pub fn cache(&self) -> Arc<RwLock<ExpiringCache>> {
        Arc::clone(&self.cache)
    }

    // == Shorten ==
    /// Stores `raw_url` under a fresh key and returns the public short link.
    ///
    /// `raw_url` is percent-decoded before it is parsed, and must be an
    /// absolute URL with a host. The alias is only embedded in the returned
    /// URL's path.
    pub async fn shorten(&self, alias: &str, raw_url: &str, base_url: &str) -> Result<ShortLink> {
        let alias = validate_alias(alias)?;
        let target = normalize_url(raw_url)?;

        let mut seed = String::with_capacity(alias.len_utf8() + target.len());
        seed.push(alias);
        seed.push_str(&target);
        let key = derive_key(&seed, DEFAULT_KEY_LENGTH)?;

        let lifespan = link_lifespan();
        let expiration = {
            let mut cache = self.cache.write().await;
            cache.set(key.clone(), target.clone(), lifespan)
        };

        let short_url = format!("{}/{}/{}", base_url.trim_end_matches('/'), alias, key);
        debug!(%key, %target, "short link created");

        Ok(ShortLink {
            short_url,
            key,
            target,
            expiration,
            lifespan,
        })
    }

    // == Resolve ==
    /// Returns the target stored under `key`.
    ///
    /// # Errors
    /// `NotFound` when the key was never set, has expired, or holds a blank value.
    pub async fn resolve(&self, key: &str) -> Result<String> {
        let target = {
            let cache = self.cache.read().await;
            cache.get(key)
        };

        match target {
            Some(target) if !target.trim().is_empty() => {
                debug!(%key, %target, "short link resolved");
                Ok(target)
            }
            _ => {
                debug!(%key, "short link missing or expired");
                Err(ShortenerError::NotFound)
            }
        }
    }
}

/// Accepts exactly one letter. Letter-numbers such as `Ⅳ` are alphabetic
/// but not letters, so numeric characters are turned away.
fn validate_alias(alias: &str) -> Result<char> {
    let mut chars = alias.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() && !c.is_numeric() => Ok(c),
        _ => Err(ShortenerError::InvalidAlias),
    }
}

/// Percent-decodes `raw_url` and returns its canonical absolute form.
///
/// Escapes that do not decode to UTF-8 are left as submitted, and the parser
/// decides whether the result is a URL.
fn normalize_url(raw_url: &str) -> Result<String> {
    if raw_url.trim().is_empty() {
        return Err(ShortenerError::empty_url());
    }

    let decoded = urlencoding::decode(raw_url)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw_url.to_string());
    let parsed = Url::parse(&decoded).map_err(|_| ShortenerError::malformed_url())?;
    if !parsed.has_host() {
        return Err(ShortenerError::malformed_url());
    }

    Ok(parsed.to_string())
}
