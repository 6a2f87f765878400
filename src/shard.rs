//! Sharding core: the shard function family and the identifier codec.
//!
//! Everything here is pure. No I/O, no shared state, no logging on the
//! per-key path.
//!
//! # Module Structure
//!
//! - `function`: the four shard transformations
//! - `identifier`: function + parameter, with its canonical textual form

pub mod function;
pub mod identifier;

pub use function::{PAD_CHAR, ShardFunction};
pub use identifier::{DEFAULT_SHARD_ID, SHARD_ID_PREFIX, SHARD_ID_VERSION, ShardIdentifier};
