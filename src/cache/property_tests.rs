//! Property-Based Tests for the cache and key derivation
//!
//! Uses proptest to check expiry, overwrite, and key shape across many inputs.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use crate::cache::{Clock, ExpiringCache, ManualClock};
use crate::error::ShortenerError;
use crate::shortener::{derive_key, RedirectService, DEFAULT_KEY_LENGTH, HEX_DIGEST_LENGTH};

// == Strategies ==
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,16}"
}

fn valid_value_strategy() -> impl Strategy<Value = String> {
    "https://[a-z]{1,12}\\.com/[a-z0-9]{0,12}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String, ttl_secs: i64 },
    Advance { secs: i64 },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (valid_key_strategy(), valid_value_strategy(), 1i64..600)
            .prop_map(|(key, value, ttl_secs)| CacheOp::Set { key, value, ttl_secs }),
        (0i64..300).prop_map(|secs| CacheOp::Advance { secs }),
        valid_key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

fn cache_with_clock() -> (ExpiringCache, ManualClock) {
    let clock = ManualClock::new(Utc::now());
    (ExpiringCache::new(Arc::new(clock.clone())), clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it back before expiry returns the stored value.
    #[test]
    fn prop_roundtrip_storage(key in valid_key_strategy(), value in valid_value_strategy()) {
        let (mut store, _) = cache_with_clock();

        store.set(key.clone(), value.clone(), Duration::minutes(60));

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // A later set for the same key wins.
    #[test]
    fn prop_overwrite_semantics(
        key in valid_key_strategy(),
        value1 in valid_value_strategy(),
        value2 in valid_value_strategy()
    ) {
        let (mut store, _) = cache_with_clock();

        store.set(key.clone(), value1, Duration::minutes(60));
        store.set(key.clone(), value2.clone(), Duration::minutes(60));

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // Entries are visible strictly before their TTL and invisible from it on.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        ttl_secs in 1i64..7200,
        elapsed_secs in 0i64..14400
    ) {
        let (mut store, clock) = cache_with_clock();

        store.set(key.clone(), value.clone(), Duration::seconds(ttl_secs));
        clock.advance(Duration::seconds(elapsed_secs));

        if elapsed_secs < ttl_secs {
            prop_assert_eq!(store.get(&key), Some(value));
        } else {
            prop_assert_eq!(store.get(&key), None);
        }
    }

    // The cache agrees with a simple model for any interleaving of sets,
    // clock advances and gets; purging never changes what readers see.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let (mut store, clock) = cache_with_clock();
        let mut model: HashMap<String, (String, chrono::DateTime<Utc>)> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl_secs } => {
                    let expires_at = clock.now() + Duration::seconds(ttl_secs);
                    store.set(key.clone(), value.clone(), Duration::seconds(ttl_secs));
                    model.insert(key, (value, expires_at));
                }
                CacheOp::Advance { secs } => {
                    clock.advance(Duration::seconds(secs));
                    let before: Vec<_> = model.keys().map(|k| store.get(k)).collect();
                    store.purge_expired();
                    let after: Vec<_> = model.keys().map(|k| store.get(k)).collect();
                    prop_assert_eq!(before, after);
                }
                CacheOp::Get { key } => {
                    let now = clock.now();
                    let expected = model
                        .get(&key)
                        .filter(|(_, expires_at)| now < *expires_at)
                        .map(|(value, _)| value.clone());
                    prop_assert_eq!(store.get(&key), expected);
                }
            }
        }
    }

    // Keys always have the requested length and only contain letters a-p in either case.
    #[test]
    fn prop_key_shape(seed in ".*", length in 0usize..HEX_DIGEST_LENGTH) {
        let key = derive_key(&seed, length).unwrap();

        prop_assert_eq!(key.len(), length);
        prop_assert!(key.chars().all(|c| ('a'..='p').contains(&c.to_ascii_lowercase())));
    }

    // Lengths the digest cannot cover are rejected.
    #[test]
    fn prop_key_length_too_long(seed in ".*", length in HEX_DIGEST_LENGTH..200) {
        prop_assert!(matches!(derive_key(&seed, length), Err(ShortenerError::InvalidArgument(_))));
    }

    // Every single-letter alias with an absolute URL shortens to a
    // well-formed key that resolves back to the canonical URL.
    #[test]
    fn prop_valid_alias_shortens_and_resolves(
        alias in "[a-zA-Z]",
        url in valid_value_strategy()
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (link, resolved) = rt.block_on(async {
            let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(Utc::now()));
            let service = RedirectService::new(Arc::new(RwLock::new(ExpiringCache::new(clock))));
            let link = service.shorten(&alias, &url, "https://short.ly").await.unwrap();
            let resolved = service.resolve(&link.key).await.unwrap();
            (link, resolved)
        });

        prop_assert_eq!(link.key.len(), DEFAULT_KEY_LENGTH);
        prop_assert!(link.key.chars().all(|c| c.is_ascii_alphabetic()));
        prop_assert_eq!(link.short_url, format!("https://short.ly/{}/{}", alias, link.key));
        prop_assert_eq!(resolved, url::Url::parse(&url).unwrap().to_string());
    }

    // Any non-letter or multi-character alias is rejected.
    #[test]
    fn prop_invalid_alias_rejected(alias in "([0-9]|[!-/]|[a-z]{2,4})?") {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let result = rt.block_on(async {
            let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(Utc::now()));
            let cache = Arc::new(RwLock::new(ExpiringCache::new(clock)));
            RedirectService::new(cache)
                .shorten(&alias, "http://example.com", "https://short.ly")
                .await
        });
        prop_assert_eq!(result, Err(ShortenerError::InvalidAlias));
    }
}

// == Property Test for Concurrent Operation Correctness ==
// Readers sharing the cache through Arc<RwLock<..>> always see a whole value.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_concurrent_shorten_and_resolve(
        urls in prop::collection::vec(valid_value_strategy(), 1..20)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(Utc::now()));
            let cache = Arc::new(RwLock::new(ExpiringCache::new(clock)));
            let service = RedirectService::new(cache);

            let mut handles = vec![];
            for (i, url) in urls.into_iter().enumerate() {
                let service = service.clone();
                let alias = if i % 2 == 0 { "a" } else { "b" };
                handles.push(tokio::spawn(async move {
                    let link = service.shorten(alias, &url, "https://short.ly").await?;
                    let resolved = service.resolve(&link.key).await?;
                    Ok::<_, ShortenerError>((link, resolved))
                }));
            }

            let mut results = vec![];
            for handle in handles {
                let result = handle
                    .await
                    .expect("Task should not panic")
                    .expect("Shorten and resolve should succeed");
                results.push(result);
            }

            let targets: HashSet<String> = results.iter().map(|(link, _)| link.target.clone()).collect();
            for (link, resolved) in &results {
                prop_assert_eq!(link.key.len(), DEFAULT_KEY_LENGTH);
                // a key collision may hand back another task's target, never a torn one
                prop_assert!(targets.contains(resolved), "unexpected target {}", resolved);
            }

            Ok(())
        })?;
    }
}
