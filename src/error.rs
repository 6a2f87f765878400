//! Error types for s3shard.

use thiserror::Error;

use crate::shard::ShardIdentifier;

/// Reasons a textual shard identifier is rejected by the parser.
///
/// Every variant maps to one fixed reason string (see [`ParseError::reason`]).
/// Parsing is deterministic, so a given input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty identifier")]
    Empty,

    #[error("missing or invalid prefix: {0}")]
    MissingPrefix(String),

    #[error("malformed identifier: {0}")]
    Malformed(String),

    #[error("unsupported version: {0}")]
    UnsupportedVersion(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),
}

impl ParseError {
    /// The fixed, human-readable reason without the offending input.
    pub fn reason(&self) -> &'static str {
        match self {
            ParseError::Empty => "empty identifier",
            ParseError::MissingPrefix(_) => "missing or invalid prefix",
            ParseError::Malformed(_) => "malformed identifier",
            ParseError::UnsupportedVersion(_) => "unsupported version",
            ParseError::InvalidParameter(_) => "invalid parameter",
            ParseError::UnknownFunction(_) => "unknown function",
        }
    }
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum ShardError {
    #[error("shard identifier error: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sharding mismatch: store uses {persisted}, requested {requested}")]
    ShardMismatch {
        persisted: ShardIdentifier,
        requested: ShardIdentifier,
    },
}

impl ShardError {
    pub fn mismatch(persisted: ShardIdentifier, requested: ShardIdentifier) -> Self {
        ShardError::ShardMismatch {
            persisted,
            requested,
        }
    }
}

/// Result type alias for s3shard operations.
pub type Result<T> = std::result::Result<T, ShardError>;
