//! # Haraka Core
//!
//! Foundational building blocks for the haraka response cache.
//!
//! This crate provides the pieces shared by the cache and its callers:
//!
//! - **Keys**: Deterministic cache-key derivation from a resource path and
//!   its query parameters
//! - **Errors**: Configuration error types
//! - **Constants**: Tuning defaults for TTLs and the sweep interval
//!
//! ## Example
//!
//! ```rust
//! use haraka_core::{cache_key, QueryParams};
//!
//! let params = QueryParams::new().with("role", "admin");
//! let key = cache_key("/users", Some(&params));
//! assert_eq!(key, "/users?role=\"admin\"");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod key;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{HarakaError, Result};
pub use key::{cache_key, QueryParams};
