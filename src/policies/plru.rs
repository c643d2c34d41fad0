use crate::error::ReplacementError;
use crate::CacheReplacement;

/// Direction bit stored in each internal tree node
///
/// The bit names the child subtree where the next victim is more likely
/// to be found; touching a way flips every ancestor that still points at
/// it, steering future victim searches elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Left,
    Right,
}

impl Flag {
    fn flipped(self) -> Flag {
        match self {
            Flag::Left => Flag::Right,
            Flag::Right => Flag::Left,
        }
    }

    /// Direction from a parent toward its child at tree index `node`
    ///
    /// Children of node `p` sit at `2p + 1` (left, odd index) and
    /// `2p + 2` (right, even index).
    fn toward(node: usize) -> Flag {
        if node % 2 != 0 { Flag::Left } else { Flag::Right }
    }
}

/// Tree Pseudo-LRU replacement for one cache set
///
/// Approximates recency with `ways - 1` direction bits instead of a full
/// order: the bits form the internal nodes of an implicit complete binary
/// tree whose leaves are the ways, with the leaf for way `w` at tree
/// index `w + (ways - 1)`.
///
/// ```text
///    0
///   / \
///  1   2   <- internal nodes (direction bits)
/// / \ / \
/// 3 4 5 6  <- leaves
/// 0 1 2 3  <- ways
/// ```
///
/// State and per-operation cost are O(log₂ ways); the price is that the
/// victim is only the *probably* least recent way, and that the tree
/// cannot express an absolute "erase this first" marker, so
/// [`CacheReplacement::set_to_erase`] is unsupported.
#[derive(Debug)]
pub struct PseudoLruReplacement {
    /// The `ways - 1` internal nodes; empty for a direct-mapped set
    nodes: Vec<Flag>,
    ways: usize,
}

impl PseudoLruReplacement {
    /// Creates the policy for a set of `ways` ways
    ///
    /// Fails with [`ReplacementError::InvalidConfiguration`] unless `ways`
    /// is a power of two: the leaf arithmetic needs a complete tree. All
    /// bits start `Left`, so a fresh instance victimizes way 0 first.
    pub fn new(ways: usize) -> Result<Self, ReplacementError> {
        if !ways.is_power_of_two() {
            return Err(ReplacementError::InvalidConfiguration { ways });
        }
        Ok(Self {
            nodes: vec![Flag::Left; ways - 1],
            ways,
        })
    }

    /// Child the victim search descends to from `node`
    fn next_node(&self, node: usize) -> usize {
        node * 2 + if self.nodes[node] == Flag::Left { 1 } else { 2 }
    }
}

impl CacheReplacement for PseudoLruReplacement {
    /// Walks from the way's leaf to the root, pointing every ancestor that
    /// still aims at the just-visited subtree away from it
    fn touch(&mut self, way: usize) {
        assert!(
            way < self.ways,
            "way {way} out of range for {} ways",
            self.ways
        );
        let mut node = way + self.nodes.len();
        while node != 0 {
            let parent = (node - 1) / 2;
            if self.nodes[parent] == Flag::toward(node) {
                self.nodes[parent] = self.nodes[parent].flipped();
            }
            node = parent;
        }
    }

    /// Always unsupported: the bits encode only relative recency, so there
    /// is no way to pin a single leaf as the unconditional next victim
    fn set_to_erase(&mut self, way: usize) -> Result<(), ReplacementError> {
        assert!(
            way < self.ways,
            "way {way} out of range for {} ways",
            self.ways
        );
        Err(ReplacementError::UnsupportedOperation {
            policy: "Pseudo-LRU",
        })
    }

    /// Follows the direction bits from the root to a leaf, touches the
    /// chosen way, and returns it
    fn update(&mut self) -> usize {
        let mut node = 0;
        while node < self.nodes.len() {
            node = self.next_node(node);
        }
        let way = node - self.nodes.len();
        self.touch(way);
        way
    }

    fn ways(&self) -> usize {
        self.ways
    }
}
