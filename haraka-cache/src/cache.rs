//! In-memory TTL cache for REST responses.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use haraka_core::constants::{DEFAULT_SWEEP_INTERVAL_MS, DEFAULT_TTL_MS};
use haraka_core::error::{HarakaError, Result};
use haraka_core::key::{cache_key, QueryParams};

/// Cache entry with TTL.
#[derive(Clone)]
struct CacheEntry {
    data: Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// An entry is valid while `elapsed < ttl`; a zero TTL is never valid.
    fn is_expired(&self) -> bool {
        self.stored_at.elapsed() >= self.ttl
    }
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Default TTL in milliseconds for entries stored without an explicit TTL
    pub default_ttl_ms: u64,
    /// Interval in milliseconds between background sweeps
    pub sweep_interval_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
        }
    }
}

impl CacheConfig {
    /// Validates the configuration.
    ///
    /// A zero default TTL would expire every default-TTL entry on arrival,
    /// and a zero sweep interval would spin the sweeper.
    pub fn validate(&self) -> Result<()> {
        if self.default_ttl_ms == 0 {
            return Err(HarakaError::InvalidTtl(self.default_ttl_ms));
        }
        if self.sweep_interval_ms == 0 {
            return Err(HarakaError::InvalidSweepInterval(self.sweep_interval_ms));
        }
        Ok(())
    }
}

/// In-memory cache for REST responses.
///
/// Thread-safe and supports TTL-based expiration. Entries are addressed by
/// the key derived from a resource path and its query parameters; a write
/// replaces any existing entry for the same key wholesale.
///
/// Responses are stored as JSON values and handed back by value, so
/// callers can never mutate what the cache holds. `get` deserializes into
/// the caller's requested type — the caller is responsible for requesting
/// the type that was stored, and a payload that does not deserialize is
/// treated as a miss.
///
/// Expiration is lazy: `get` removes an expired entry on access, and the
/// periodic sweep ([`crate::spawn_sweeper`]) removes the rest.
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    config: CacheConfig,
}

impl ResponseCache {
    /// Creates a new cache with default configuration.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config: CacheConfig::default(),
        }
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: RwLock::new(HashMap::new()),
            config,
        })
    }

    /// Returns the cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Gets a cached response for a resource and optional parameters.
    ///
    /// Returns `None` if not cached or expired. An expired entry is
    /// removed on access. A valid hit does not refresh the TTL.
    pub fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: Option<&QueryParams>,
    ) -> Option<T> {
        let key = cache_key(resource, params);

        {
            let entries = self.entries.read();
            match entries.get(&key) {
                None => return None,
                Some(entry) if !entry.is_expired() => {
                    return match serde_json::from_value(entry.data.clone()) {
                        Ok(data) => Some(data),
                        Err(err) => {
                            warn!(%key, %err, "cached payload does not match requested type");
                            None
                        }
                    };
                }
                Some(_) => {}
            }
        }

        // Expired: reacquire as a writer and re-check, since a concurrent
        // set may have replaced the entry while the read lock was released.
        let mut entries = self.entries.write();
        if entries.get(&key).map_or(false, CacheEntry::is_expired) {
            entries.remove(&key);
            debug!(%key, "expired entry removed on access");
        }
        None
    }

    /// Stores a response with the default TTL, replacing any existing
    /// entry for the same key.
    pub fn set<T: Serialize>(&self, resource: &str, data: &T, params: Option<&QueryParams>) {
        self.set_with_ttl(
            resource,
            data,
            params,
            Duration::from_millis(self.config.default_ttl_ms),
        );
    }

    /// Stores a response with a custom TTL, replacing any existing entry
    /// for the same key.
    ///
    /// A zero TTL is accepted and produces an entry that is already
    /// expired. A payload that cannot be serialized to JSON is not cached;
    /// the caller sees the same behavior as a miss on the next read.
    pub fn set_with_ttl<T: Serialize>(
        &self,
        resource: &str,
        data: &T,
        params: Option<&QueryParams>,
        ttl: Duration,
    ) {
        let key = cache_key(resource, params);

        let data = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(err) => {
                warn!(%key, %err, "payload not serializable, skipping cache");
                return;
            }
        };

        self.entries.write().insert(
            key,
            CacheEntry {
                data,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Removes the entry for a resource and optional parameters.
    ///
    /// No-op if the entry is absent.
    pub fn invalidate(&self, resource: &str, params: Option<&QueryParams>) {
        let key = cache_key(resource, params);
        self.entries.write().remove(&key);
    }

    /// Removes every entry whose key contains `pattern` as a literal
    /// substring.
    ///
    /// Callers typically pass a resource-path prefix after a mutation to
    /// drop every cached read it could have staled. Plain substring
    /// containment, not a regex or glob.
    pub fn invalidate_pattern(&self, pattern: &str) {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|key, _| !key.contains(pattern));

        let removed = before - entries.len();
        if removed > 0 {
            debug!(pattern, removed, "invalidated entries by pattern");
        }
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Removes all expired entries, returning how many were removed.
    ///
    /// `get` only expires lazily on access; this proactive sweep keeps
    /// entries that are never re-read from accumulating. Invoked
    /// periodically by the background sweeper.
    pub fn cleanup(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    /// Returns the number of cached entries, including expired entries
    /// that have not yet been swept.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns cache statistics.
    ///
    /// Key order follows the underlying map and is not stable; callers
    /// must not depend on it.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read();
        let expired = entries.values().filter(|e| e.is_expired()).count();

        CacheStats {
            size: entries.len(),
            expired_entries: expired,
            keys: entries.keys().cloned().collect(),
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Debug)]
pub struct CacheStats {
    /// Total entries, including expired entries not yet swept
    pub size: usize,
    /// Entries currently expired but not yet swept
    pub expired_entries: usize,
    /// All current keys (unspecified order)
    pub keys: Vec<String>,
}
