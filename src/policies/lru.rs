use crate::error::ReplacementError;
use crate::CacheReplacement;

/// Sentinel for "no neighbor" in the arena links
const NONE: usize = usize::MAX;

/// Exact least-recently-used replacement for one cache set
///
/// Keeps a strict recency order over all ways as an intrusive doubly
/// linked list threaded through a fixed arena: way `i` owns slot `i` for
/// the instance's lifetime and the links store way indices, so every
/// relocation is O(1) index reassignment with no node allocation and no
/// pointer aliasing. `head` is the most-recently-used end, `tail` the
/// least-recently-used end and therefore the next victim.
///
/// The order always contains each way exactly once; operations only ever
/// splice, never insert or remove.
#[derive(Debug)]
pub struct LruReplacement {
    /// One slot per way, links threaded in recency order
    slots: Vec<Slot>,
    /// Most-recently-used way
    head: usize,
    /// Least-recently-used way, the next `update` result
    tail: usize,
}

/// Neighbor links of one way within the recency order
#[derive(Debug, Clone, Copy)]
struct Slot {
    /// The next-more-recent way, or `NONE` at the head
    prev: usize,
    /// The next-less-recent way, or `NONE` at the tail
    next: usize,
}

impl LruReplacement {
    /// Creates the policy for a set of `ways` ways
    ///
    /// Ways are chained in ascending order with each one entering at the
    /// most-recent end, so a fresh instance evicts way 0 first and way
    /// `ways - 1` last. That initial order is a tie-break among
    /// never-touched ways, not a guarantee callers should lean on.
    ///
    /// # Panics
    /// Panics if `ways` is 0.
    pub fn new(ways: usize) -> Self {
        assert!(ways > 0, "a cache set needs at least one way");

        let mut slots = Vec::with_capacity(ways);
        for way in 0..ways {
            slots.push(Slot {
                prev: if way + 1 < ways { way + 1 } else { NONE },
                next: if way > 0 { way - 1 } else { NONE },
            });
        }
        Self {
            slots,
            head: ways - 1,
            tail: 0,
        }
    }

    /// Detaches `way` from the order, patching its neighbors together
    fn unlink(&mut self, way: usize) {
        let Slot { prev, next } = self.slots[way];
        if prev != NONE {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NONE {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }
    }

    /// Reattaches a detached `way` at the most-recent end
    fn link_front(&mut self, way: usize) {
        self.slots[way] = Slot {
            prev: NONE,
            next: self.head,
        };
        if self.head != NONE {
            self.slots[self.head].prev = way;
        } else {
            self.tail = way;
        }
        self.head = way;
    }

    /// Reattaches a detached `way` at the least-recent end
    fn link_back(&mut self, way: usize) {
        self.slots[way] = Slot {
            prev: self.tail,
            next: NONE,
        };
        if self.tail != NONE {
            self.slots[self.tail].next = way;
        } else {
            self.head = way;
        }
        self.tail = way;
    }
}

impl CacheReplacement for LruReplacement {
    /// Moves `way` to the most-recent end of the order
    fn touch(&mut self, way: usize) {
        assert!(
            way < self.slots.len(),
            "way {way} out of range for {} ways",
            self.slots.len()
        );
        if self.head == way {
            return;
        }
        self.unlink(way);
        self.link_front(way);
    }

    /// Moves `way` to the least-recent end, making it the next victim
    fn set_to_erase(&mut self, way: usize) -> Result<(), ReplacementError> {
        assert!(
            way < self.slots.len(),
            "way {way} out of range for {} ways",
            self.slots.len()
        );
        if self.tail != way {
            self.unlink(way);
            self.link_back(way);
        }
        Ok(())
    }

    /// Takes the least-recent way, promotes it to most recent, returns it
    fn update(&mut self) -> usize {
        let victim = self.tail;
        if self.head != victim {
            self.unlink(victim);
            self.link_front(victim);
        }
        victim
    }

    fn ways(&self) -> usize {
        self.slots.len()
    }
}
