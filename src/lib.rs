//! Replacement-policy engine for set-associative cache models.
//!
//! Every cache set owns one policy instance for its lifetime. The owner
//! reports hits with [`CacheReplacement::touch`], asks for an eviction
//! victim with [`CacheReplacement::update`], and may force a way to the
//! front of the eviction queue with [`CacheReplacement::set_to_erase`]
//! where the policy supports it. Instances are built through
//! [`policies::create_replacement`] from a configuration name string.

// Exported modules of the crate
pub mod error;
pub mod policies;

pub use error::ReplacementError;

/// Core trait defining replacement-policy behavior
///
/// Types implementing this trait own the eviction bookkeeping for exactly
/// one cache set with a fixed way count. The surrounding cache model holds
/// the lines and tags; the policy only ever sees way indices in
/// `[0, ways)`.
///
/// Mutation is caller-serialized: an instance is never shared between sets
/// and the owner must not invoke two operations on it concurrently.
pub trait CacheReplacement: std::fmt::Debug {
    /// Record that `way` was just accessed, on a hit or a post-eviction fill
    ///
    /// # Panics
    /// Panics if `way` is outside `[0, ways)`. An unknown way index is a
    /// caller bug, not a recoverable condition.
    fn touch(&mut self, way: usize);

    /// Mark `way` as the next eviction candidate without counting it as used
    ///
    /// Used for explicit invalidation. Fails with
    /// [`ReplacementError::UnsupportedOperation`] on policies whose state
    /// cannot express an artificially least-recent way; callers must treat
    /// that as "feature unavailable", not as corruption.
    ///
    /// # Panics
    /// Panics if `way` is outside `[0, ways)`.
    fn set_to_erase(&mut self, way: usize) -> Result<(), ReplacementError>;

    /// Select the current victim way and return its index
    ///
    /// The selected way is simultaneously promoted to most recently used,
    /// so an owner that stores new data into the returned way needs no
    /// follow-up `touch`.
    fn update(&mut self) -> usize;

    /// Return the fixed way count this instance was built with
    fn ways(&self) -> usize;
}

// Convenient re-exports for common types and modules
pub mod prelude {
    pub use super::policies::{
        LruReplacement, PolicyType, PseudoLruReplacement, create_replacement,
    };
    pub use super::{CacheReplacement, ReplacementError};
}
