//! Shard identifiers and their canonical textual form.
//!
//! A [`ShardIdentifier`] names one shard function together with its parameter.
//! Its canonical form, e.g. `/repo/s3/shard/v1/next-to-last/2`, is what gets
//! persisted next to stored data so later readers can reproduce the exact
//! layout used at write time.
//!
//! # Grammar
//!
//! ```text
//! identifier     = prefix-literal "v1/" fn-name "/" param
//! prefix-literal = "/repo/s3/shard/"
//! fn-name        = "identity" / "prefix" / "suffix" / "next-to-last"
//! param          = 1*DIGIT
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::shard::function::ShardFunction;

/// Literal that every canonical identifier starts with.
pub const SHARD_ID_PREFIX: &str = "/repo/s3/shard/";

/// The only supported identifier version.
pub const SHARD_ID_VERSION: &str = "v1";

/// Canonical form of the default sharding scheme, `next-to-last(2)`.
pub const DEFAULT_SHARD_ID: &str = "/repo/s3/shard/v1/next-to-last/2";

/// A shard function bound to its parameter.
///
/// Values are immutable and `Copy`. Two identifiers with the same function and
/// parameter always shard every key identically, so a single value can be
/// shared freely across threads.
///
/// # Example
///
/// ```
/// use s3shard::ShardIdentifier;
///
/// let id: ShardIdentifier = "/repo/s3/shard/v1/prefix/2".parse().unwrap();
/// assert_eq!(id.shard("abc"), "ab");
/// assert_eq!(id.to_string(), "/repo/s3/shard/v1/prefix/2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShardIdentifier {
    function: ShardFunction,
    param: usize,
}

impl ShardIdentifier {
    pub fn new(function: ShardFunction, param: usize) -> Self {
        Self { function, param }
    }

    /// Keys are used unchanged. `param` is only kept so the identifier
    /// round-trips through its textual form.
    pub fn identity(param: usize) -> Self {
        Self::new(ShardFunction::Identity, param)
    }

    pub fn prefix(len: usize) -> Self {
        Self::new(ShardFunction::Prefix, len)
    }

    pub fn suffix(len: usize) -> Self {
        Self::new(ShardFunction::Suffix, len)
    }

    pub fn next_to_last(len: usize) -> Self {
        Self::new(ShardFunction::NextToLast, len)
    }

    pub fn function(&self) -> ShardFunction {
        self.function
    }

    pub fn name(&self) -> &'static str {
        self.function.name()
    }

    pub fn param(&self) -> usize {
        self.param
    }

    /// Compute the shard segment for a key with its leading separator
    /// already stripped.
    pub fn shard(&self, noslash: &str) -> String {
        self.function.apply(self.param, noslash)
    }

    /// The bound transform as a standalone function value.
    pub fn transform(self) -> impl Fn(&str) -> String + Send + Sync + Copy + 'static {
        let Self { function, param } = self;
        move |noslash: &str| function.apply(param, noslash)
    }

    /// Parse a canonical identifier.
    ///
    /// Surrounding whitespace is ignored. Everything else must match the
    /// grammar exactly; function names are case-sensitive.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(reject(input, ParseError::Empty));
        }

        let rest = input
            .strip_prefix(SHARD_ID_PREFIX)
            .ok_or_else(|| reject(input, ParseError::MissingPrefix(input.to_string())))?;

        let parts: Vec<&str> = rest.split('/').collect();
        let &[version, name, param] = parts.as_slice() else {
            return Err(reject(input, ParseError::Malformed(rest.to_string())));
        };

        if version != SHARD_ID_VERSION {
            return Err(reject(
                input,
                ParseError::UnsupportedVersion(version.to_string()),
            ));
        }

        let param = parse_param(param)
            .ok_or_else(|| reject(input, ParseError::InvalidParameter(param.to_string())))?;

        let function = ShardFunction::from_name(name)
            .ok_or_else(|| reject(input, ParseError::UnknownFunction(name.to_string())))?;

        Ok(Self::new(function, param))
    }
}

impl Default for ShardIdentifier {
    fn default() -> Self {
        Self::next_to_last(2)
    }
}

impl fmt::Display for ShardIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}/{}/{}",
            SHARD_ID_PREFIX,
            SHARD_ID_VERSION,
            self.function.name(),
            self.param
        )
    }
}

impl FromStr for ShardIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShardIdentifier {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShardIdentifier> for String {
    fn from(id: ShardIdentifier) -> Self {
        id.to_string()
    }
}

/// `1*DIGIT` that fits in a `usize`. Signs are rejected, unlike
/// `usize::from_str`.
fn parse_param(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn reject(input: &str, err: ParseError) -> ParseError {
    debug!("Rejected shard identifier {:?}: {}", input, err.reason());
    err
}
