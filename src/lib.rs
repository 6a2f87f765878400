//! # s3shard
//!
//! Deterministic sharding of content-addressed keys for object stores.
//!
//! A flat key space is spread across short prefixes ("shard segments") so no
//! single store partition becomes a hotspot. The scheme in use is named by a
//! canonical identifier such as `/repo/s3/shard/v1/next-to-last/2`, which is
//! persisted with the data so later readers shard keys exactly as the writer
//! did.
//!
//! ## Features
//!
//! - Four pure shard functions: identity, prefix, suffix, next-to-last
//! - Strict parser and encoder for shard identifiers
//! - Serde support and a JSON configuration type
//! - Lookup of persisted `SHARDING` markers through a pluggable source
//!
//! ```
//! use s3shard::ShardIdentifier;
//!
//! let id = ShardIdentifier::parse("/repo/s3/shard/v1/next-to-last/2").unwrap();
//! assert_eq!(id.shard("abcd"), "bc");
//! ```

mod config;
mod error;
pub mod metadata;
pub mod shard;

// Re-exports for the public API
pub use config::{ShardConfig, ShardConfigBuilder};
pub use error::{ParseError, Result, ShardError};
pub use metadata::{MetadataSource, read_shard_id, resolve_shard_id};
pub use shard::{DEFAULT_SHARD_ID, PAD_CHAR, SHARD_ID_PREFIX, ShardFunction, ShardIdentifier};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
