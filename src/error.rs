//! Error types surfaced by policy construction and capability probes.

use thiserror::Error;

/// Names the factory recognizes, in the order they are reported to callers
pub const SUPPORTED_POLICIES: [&str; 2] = ["LRU", "Pseudo-LRU"];

/// Errors produced by the replacement engine
///
/// The construction failures (`UnknownPolicy`, `InvalidConfiguration`) are
/// fatal to cache-set construction and should be propagated as
/// configuration errors. `UnsupportedOperation` is recoverable: the caller
/// simply stops using forced eviction with that policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplacementError {
    /// The factory was handed a policy name it does not recognize
    #[error(
        "\"{name}\" replacement policy is not defined, supported policies are: {}",
        SUPPORTED_POLICIES.join(", ")
    )]
    UnknownPolicy { name: String },

    /// Pseudo-LRU requested with a way count its tree cannot index
    #[error("number of ways must be a power of two, got {ways}")]
    InvalidConfiguration { ways: usize },

    /// `set_to_erase` called on a policy whose state cannot express it
    #[error("{policy} does not support forced eviction")]
    UnsupportedOperation { policy: &'static str },
}
