use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::shard::ShardIdentifier;

/// Sharding configuration for a store.
///
/// The identifier is stored in its canonical textual form and validated by the
/// strict parser on load, so a typo in a config file is reported instead of
/// silently falling back to another layout.
///
/// ```
/// use s3shard::{ShardConfig, ShardIdentifier};
///
/// let config = ShardConfig::from_json(r#"{"shard": "/repo/s3/shard/v1/suffix/3"}"#).unwrap();
/// assert_eq!(config.shard, ShardIdentifier::suffix(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShardConfig {
    /// Sharding scheme. Defaults to `next-to-last(2)`.
    #[serde(default)]
    pub shard: ShardIdentifier,
}

impl ShardConfig {
    pub fn new(shard: ShardIdentifier) -> Self {
        Self { shard }
    }

    pub fn builder() -> ShardConfigBuilder {
        ShardConfigBuilder::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Default)]
pub struct ShardConfigBuilder {
    shard: Option<ShardIdentifier>,
}

impl ShardConfigBuilder {
    pub fn shard(mut self, shard: ShardIdentifier) -> Self {
        self.shard = Some(shard);
        self
    }

    /// Parse `id` and use it as the sharding scheme.
    pub fn shard_str(mut self, id: &str) -> Result<Self> {
        self.shard = Some(ShardIdentifier::parse(id)?);
        Ok(self)
    }

    pub fn build(self) -> ShardConfig {
        ShardConfig {
            shard: self.shard.unwrap_or_default(),
        }
    }
}
