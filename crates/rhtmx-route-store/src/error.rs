/// Errors raised while compiling patterns or generating paths
use thiserror::Error;

use crate::params::ParamKey;

/// Errors that can occur in the route store.
///
/// Lookups never fail: an unmatched path is a plain `None`, and a captured
/// value that cannot be percent-decoded is kept raw. Only compiling a pattern
/// and re-expanding one into a path report errors.
#[derive(Debug, Error)]
pub enum RouteStoreError {
    /// A `(` or `)` that does not belong to a parameter group.
    #[error("unmatched `{found}` at offset {offset} in pattern `{pattern}`")]
    UnmatchedParen {
        pattern: String,
        offset: usize,
        found: char,
    },

    /// The regular expression built for a pattern was rejected.
    #[error("invalid regular expression for pattern `{pattern}`: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A required parameter was not supplied to the generator.
    #[error("expected parameter `{0}` to be defined")]
    MissingParam(ParamKey),

    /// A repeated parameter was supplied with no segments.
    #[error("expected parameter `{0}` to not be empty")]
    EmptyParam(ParamKey),

    /// A supplied value does not satisfy the parameter's pattern.
    #[error("expected parameter `{key}` to match `{pattern}`, but received `{value}`")]
    ParamMismatch {
        key: ParamKey,
        pattern: String,
        value: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouteStoreError>;
