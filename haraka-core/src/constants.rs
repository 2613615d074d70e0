//! Tuning constants for the haraka response cache.
//!
//! Entries are addressed by REST resource paths and expire by TTL; these
//! defaults balance response freshness against backend load for a typical
//! read-heavy client.

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY LIFETIMES
// ═══════════════════════════════════════════════════════════════════════════════

/// Default TTL in milliseconds for entries stored without an explicit TTL.
/// Five minutes keeps list views responsive without serving stale data for
/// long after a mutation elsewhere in the system.
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// Suggested TTL in milliseconds for fast-changing resources
/// (dashboards, payment status, notification counts).
pub const VOLATILE_TTL_MS: u64 = 30 * 1000;

/// Suggested TTL in milliseconds for near-static resources
/// (category lists, product metadata).
pub const STABLE_TTL_MS: u64 = 60 * 60 * 1000;

// ═══════════════════════════════════════════════════════════════════════════════
// BACKGROUND SWEEP
// ═══════════════════════════════════════════════════════════════════════════════

/// Default interval in milliseconds between background sweeps of expired
/// entries. Expiration is otherwise lazy (on access), so the sweep is what
/// bounds growth from entries that are never re-read.
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 5 * 60 * 1000;
