//! Replacement-policy implementations
//!
//! This module contains the eviction algorithms that implement the
//! `CacheReplacement` trait, one module per algorithm, plus the factory
//! that maps a configuration name string to a constructed instance.

pub mod lru;
pub mod plru;

// Re-export all policy implementations
pub use lru::LruReplacement;
pub use plru::PseudoLruReplacement;

use crate::error::ReplacementError;
use crate::CacheReplacement;

/// Enumeration of the available replacement policies
///
/// The policy set is closed: a cache model selects one of these per cache
/// by configuration name, and the factory below is the only string-keyed
/// construction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyType {
    /// Exact least-recently-used: a strict recency order over all ways
    Lru,
    /// Tree Pseudo-LRU: one direction bit per internal tree node
    PseudoLru,
}

impl PolicyType {
    /// Returns the configuration name of the policy
    pub fn name(&self) -> &'static str {
        match self {
            PolicyType::Lru => "LRU",
            PolicyType::PseudoLru => "Pseudo-LRU",
        }
    }

    /// Returns a description of the policy's behavior
    pub fn description(&self) -> &'static str {
        match self {
            PolicyType::Lru => "Evicts the exactly least recently used way",
            PolicyType::PseudoLru => {
                "Approximates recency with a binary tree of direction bits"
            }
        }
    }

    /// Returns all available policy types
    pub fn all() -> &'static [PolicyType] {
        &[PolicyType::Lru, PolicyType::PseudoLru]
    }

    /// Looks up a policy by its configuration name
    pub fn from_name(name: &str) -> Option<PolicyType> {
        Self::all().iter().copied().find(|p| p.name() == name)
    }
}

/// Factory for policy instances, keyed by configuration name
///
/// `"LRU"` builds the exact variant, `"Pseudo-LRU"` the tree variant
/// (which additionally requires `ways` to be a power of two). Any other
/// name fails with [`ReplacementError::UnknownPolicy`], whose message
/// lists the supported names. The way count is fixed for the instance's
/// lifetime.
pub fn create_replacement(
    name: &str,
    ways: usize,
) -> Result<Box<dyn CacheReplacement>, ReplacementError> {
    match PolicyType::from_name(name) {
        Some(PolicyType::Lru) => Ok(Box::new(LruReplacement::new(ways))),
        Some(PolicyType::PseudoLru) => Ok(Box::new(PseudoLruReplacement::new(ways)?)),
        None => Err(ReplacementError::UnknownPolicy {
            name: name.to_string(),
        }),
    }
}
