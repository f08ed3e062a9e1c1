use thiserror::Error;

use crate::CacheLevel;

/// Errors that can occur when constructing measurement values or parsing unit tags.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A decimal amount was negative, infinite or not a number.
    #[error("invalid magnitude {value}: {problem}")]
    InvalidMagnitude {
        /// The rejected value.
        value: f64,

        /// A human-readable description of the problem.
        problem: &'static str,
    },

    /// A tag did not match any member of the closed set for its kind.
    #[error("unrecognized {kind} tag '{tag}'")]
    UnknownTag {
        /// What kind of tag was being parsed, e.g. "storage unit".
        kind: &'static str,

        /// The tag as provided by the caller.
        tag: String,
    },

    /// A numeric cache level outside of 1..=3.
    #[error("cache level must be 1, 2 or 3 but was {0}")]
    InvalidCacheLevel(u8),

    /// The same cache level was supplied more than once when assembling a cache set.
    #[error("cache level L{0} was specified more than once")]
    DuplicateCacheLevel(CacheLevel),
}

impl Error {
    pub(crate) fn unknown_tag(kind: &'static str, tag: &str) -> Self {
        Self::UnknownTag {
            kind,
            tag: tag.to_string(),
        }
    }
}

/// A specialized `Result` type for measurement operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
