//! Cache Module
//!
//! Provides in-memory storage of short link targets with TTL expiration.

mod clock;
mod entry;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use store::ExpiringCache;
