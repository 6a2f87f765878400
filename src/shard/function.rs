//! The shard function family.
//!
//! Each function maps a "noslash" key (the key with its leading separator
//! already removed) to a short shard segment. None of them can fail: short
//! inputs are padded with [`PAD_CHAR`] instead.
//!
//! Lengths are counted in `char`s. Content identifiers are ASCII, where this
//! is the same as counting bytes.

use std::fmt;
use std::iter;

/// Character used to pad keys shorter than the requested segment width.
pub const PAD_CHAR: char = '_';

/// A sharding transformation, selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShardFunction {
    /// Returns the key unchanged; the parameter is ignored.
    Identity,
    /// First `n` characters, right-padded.
    Prefix,
    /// Last `n` characters, left-padded.
    Suffix,
    /// The `n` characters before the final character, left-padded.
    NextToLast,
}

impl ShardFunction {
    /// All functions, in canonical order.
    pub const ALL: [ShardFunction; 4] = [
        ShardFunction::Identity,
        ShardFunction::Prefix,
        ShardFunction::Suffix,
        ShardFunction::NextToLast,
    ];

    /// Canonical name as it appears in a shard identifier.
    pub fn name(self) -> &'static str {
        match self {
            ShardFunction::Identity => "identity",
            ShardFunction::Prefix => "prefix",
            ShardFunction::Suffix => "suffix",
            ShardFunction::NextToLast => "next-to-last",
        }
    }

    /// Look up a function by its canonical name. Matching is exact and
    /// case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "identity" => Some(ShardFunction::Identity),
            "prefix" => Some(ShardFunction::Prefix),
            "suffix" => Some(ShardFunction::Suffix),
            "next-to-last" => Some(ShardFunction::NextToLast),
            _ => None,
        }
    }

    /// Compute the shard segment for `noslash` with parameter `param`.
    pub fn apply(self, param: usize, noslash: &str) -> String {
        match self {
            ShardFunction::Identity => noslash.to_string(),
            ShardFunction::Prefix => prefix(param, noslash),
            ShardFunction::Suffix => suffix(param, noslash),
            ShardFunction::NextToLast => next_to_last(param, noslash),
        }
    }
}

impl fmt::Display for ShardFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn prefix(n: usize, noslash: &str) -> String {
    noslash.chars().chain(iter::repeat(PAD_CHAR)).take(n).collect()
}

fn suffix(n: usize, noslash: &str) -> String {
    let len = noslash.chars().count();
    if len >= n {
        noslash.chars().skip(len - n).collect()
    } else {
        iter::repeat_n(PAD_CHAR, n - len)
            .chain(noslash.chars())
            .collect()
    }
}

// Equivalent to left-padding with n+1 underscores and taking the n chars
// that end just before the final character.
fn next_to_last(n: usize, noslash: &str) -> String {
    let chars: Vec<char> = noslash.chars().collect();
    let len = chars.len();
    (len..len + n)
        .map(|i| if i <= n { PAD_CHAR } else { chars[i - n - 1] })
        .collect()
}
