//! # Haraka Cache
//!
//! In-memory TTL cache for REST responses.
//!
//! A best-effort, process-local memoization layer for idempotent reads:
//! callers check the cache before issuing a request, store the response
//! after a successful one, and invalidate after mutations. Misses are
//! silent and fall through to the backend; the cache is never the source
//! of truth.
//!
//! ## Example
//!
//! ```rust
//! use haraka_cache::ResponseCache;
//! use haraka_core::QueryParams;
//!
//! let cache = ResponseCache::new();
//!
//! let params = QueryParams::new().with("role", "admin");
//! cache.set("/users", &vec!["jane", "joseph"], Some(&params));
//!
//! let users: Option<Vec<String>> = cache.get("/users", Some(&params));
//! assert_eq!(users, Some(vec!["jane".to_string(), "joseph".to_string()]));
//!
//! // After a mutation, drop every cached read under the resource.
//! cache.invalidate_pattern("/users");
//! assert!(cache.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;
mod sweeper;

pub use cache::{CacheConfig, CacheStats, ResponseCache};
pub use sweeper::{spawn_sweeper, SweeperHandle};
