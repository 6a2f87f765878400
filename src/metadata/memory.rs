//! In-memory metadata source.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::Result;
use crate::metadata::MetadataSource;

/// Metadata objects held in a map. Useful for tests and for callers that
/// fetch the objects themselves and only want the lookup logic.
#[derive(Debug, Default)]
pub struct MemoryMetadata {
    objects: RwLock<HashMap<String, String>>,
}

impl MemoryMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `contents` under `name`, replacing any previous value.
    pub fn put(&self, name: impl Into<String>, contents: impl Into<String>) {
        self.objects.write().insert(name.into(), contents.into());
    }

    pub fn remove(&self, name: &str) -> Option<String> {
        self.objects.write().remove(name)
    }
}

impl MetadataSource for MemoryMetadata {
    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.objects.read().get(name).cloned())
    }
}
