//! Metadata source backed by a local directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::metadata::MetadataSource;

/// Reads metadata objects as files directly under `root`.
///
/// A missing file means the object does not exist. Any other I/O failure is
/// returned to the caller.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    root: PathBuf,
}

impl FileMetadata {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MetadataSource for FileMetadata {
    fn get(&self, name: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
