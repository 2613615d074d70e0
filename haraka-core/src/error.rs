//! Error types for haraka.
//!
//! The cache operations themselves are total functions and never fail;
//! errors exist only for rejecting an unusable configuration up front.

use thiserror::Error;

/// Result type alias using `HarakaError`.
pub type Result<T> = std::result::Result<T, HarakaError>;

/// Main error type for haraka configuration.
#[derive(Debug, Error)]
pub enum HarakaError {
    /// Configured default TTL is zero, which would expire every
    /// default-TTL entry on arrival.
    #[error("invalid default TTL: {0} ms (must be positive)")]
    InvalidTtl(u64),

    /// Configured sweep interval is zero, which would spin the sweeper.
    #[error("invalid sweep interval: {0} ms (must be positive)")]
    InvalidSweepInterval(u64),
}
