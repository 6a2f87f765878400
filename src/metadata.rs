//! Persisted sharding markers.
//!
//! A store that was written with a given sharding scheme records it in a small
//! metadata object named [`SHARDING_FN`], holding the canonical identifier,
//! and describes it for humans in [`README_FN`]. Reading them is the caller's
//! job: fetch the marker through a [`MetadataSource`] before sharding any
//! keys, then hand the resulting [`ShardIdentifier`] to the pure core.
//!
//! ```
//! use s3shard::metadata::{MemoryMetadata, SHARDING_FN, resolve_shard_id};
//! use s3shard::ShardIdentifier;
//!
//! let source = MemoryMetadata::new();
//! source.put(SHARDING_FN, "/repo/s3/shard/v1/prefix/3\n");
//!
//! let id = resolve_shard_id(&source, None).unwrap();
//! assert_eq!(id, ShardIdentifier::prefix(3));
//! ```

pub mod file;
pub mod memory;

use std::fmt::Debug;

use log::{debug, warn};

use crate::error::{Result, ShardError};
use crate::shard::{ShardFunction, ShardIdentifier};

pub use file::FileMetadata;
pub use memory::MemoryMetadata;

/// Name of the metadata object holding the canonical shard identifier.
pub const SHARDING_FN: &str = "SHARDING";

/// Name of the metadata object describing the layout for humans.
pub const README_FN: &str = "_README";

/// Read access to small named metadata objects kept alongside the data.
pub trait MetadataSource: Send + Sync + Debug {
    /// Fetch the object called `name`, or `None` if it does not exist.
    fn get(&self, name: &str) -> Result<Option<String>>;
}

/// Read and parse the persisted shard identifier, if there is one.
///
/// A marker that exists but does not parse is an error; it is never replaced
/// by a default.
pub fn read_shard_id<S: MetadataSource + ?Sized>(source: &S) -> Result<Option<ShardIdentifier>> {
    let Some(contents) = source.get(SHARDING_FN)? else {
        debug!("No {} marker found in {:?}", SHARDING_FN, source);
        return Ok(None);
    };
    let id = ShardIdentifier::parse(&contents)?;
    debug!("Found {} marker: {}", SHARDING_FN, id);
    Ok(Some(id))
}

/// Decide which identifier to use for a store.
///
/// The persisted marker wins. If the caller asked for a specific identifier
/// and the store already uses a different one, this fails with
/// [`ShardError::ShardMismatch`]. Without a marker, the requested identifier
/// is used, or the default `next-to-last(2)`.
pub fn resolve_shard_id<S: MetadataSource + ?Sized>(
    source: &S,
    requested: Option<ShardIdentifier>,
) -> Result<ShardIdentifier> {
    match (read_shard_id(source)?, requested) {
        (Some(persisted), Some(requested)) if persisted != requested => {
            warn!(
                "Store is sharded with {} but {} was requested",
                persisted, requested
            );
            Err(ShardError::mismatch(persisted, requested))
        }
        (Some(persisted), _) => Ok(persisted),
        (None, requested) => Ok(requested.unwrap_or_default()),
    }
}

/// Body of the [`SHARDING_FN`] object for `id`.
pub fn marker_contents(id: &ShardIdentifier) -> String {
    format!("{}\n", id)
}

/// Body of the [`README_FN`] object for `id`.
pub fn readme_contents(id: &ShardIdentifier) -> String {
    format!(
        "This store spreads its keys across shard prefixes.\n\
         \n\
         Sharding scheme: {}\n\
         \n\
         {}\n\
         \n\
         The scheme is recorded in the {} object. Do not change it once data\n\
         has been written, or existing keys will no longer be found.\n",
        id,
        describe(id),
        SHARDING_FN
    )
}

fn describe(id: &ShardIdentifier) -> String {
    let n = id.param();
    match id.function() {
        ShardFunction::Identity => "The shard segment is the whole key, unchanged.".to_string(),
        ShardFunction::Prefix => format!(
            "The shard segment is the first {} character(s) of the key, \
             right-padded with '_' when the key is shorter.",
            n
        ),
        ShardFunction::Suffix => format!(
            "The shard segment is the last {} character(s) of the key, \
             left-padded with '_' when the key is shorter.",
            n
        ),
        ShardFunction::NextToLast => format!(
            "The shard segment is the {} character(s) just before the final \
             character of the key, left-padded with '_' when the key is shorter.",
            n
        ),
    }
}
