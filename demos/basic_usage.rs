use cache_replacement::prelude::*;

fn main() -> Result<(), ReplacementError> {
    println!("=== Replacement-Policy Engine Demo ===\n");

    // Demo 1: exact LRU driving one cache set
    demo_exact_lru()?;

    // Demo 2: tree Pseudo-LRU and its construction precondition
    demo_pseudo_lru()?;

    // Demo 3: invalidation with graceful fallback
    demo_invalidation();

    Ok(())
}

/// One simulated cache set: tags per way, policy choosing victims
struct CacheSet {
    policy: Box<dyn CacheReplacement>,
    tags: Vec<Option<u64>>,
    hits: u64,
    misses: u64,
}

impl CacheSet {
    fn new(policy_name: &str, ways: usize) -> Result<Self, ReplacementError> {
        let policy = create_replacement(policy_name, ways)?;
        Ok(Self {
            tags: vec![None; ways],
            policy,
            hits: 0,
            misses: 0,
        })
    }

    fn access(&mut self, tag: u64) {
        if let Some(way) = self.tags.iter().position(|t| *t == Some(tag)) {
            self.policy.touch(way);
            self.hits += 1;
            println!("  tag {tag:>3}: hit  in way {way}");
        } else {
            let victim = self.policy.update();
            println!(
                "  tag {tag:>3}: miss, filled way {victim} (was {:?})",
                self.tags[victim]
            );
            self.tags[victim] = Some(tag);
            self.misses += 1;
        }
    }
}

/// Demonstrates exact LRU eviction order on a 4-way set
fn demo_exact_lru() -> Result<(), ReplacementError> {
    println!("1. Exact LRU");
    println!("------------");

    let mut set = CacheSet::new("LRU", 4)?;

    // Fill the set, then re-touch the first tag so it survives the
    // next eviction
    for tag in [100, 200, 300, 400] {
        set.access(tag);
    }
    set.access(100);
    set.access(500); // evicts 200, the least recently used
    set.access(200); // misses again

    println!("  hits: {}, misses: {}\n", set.hits, set.misses);
    Ok(())
}

/// Demonstrates the tree variant and its power-of-two requirement
fn demo_pseudo_lru() -> Result<(), ReplacementError> {
    println!("2. Tree Pseudo-LRU");
    println!("------------------");

    // A 6-way set cannot form a complete binary tree
    match create_replacement("Pseudo-LRU", 6) {
        Err(e) => println!("  6 ways rejected: {e}"),
        Ok(_) => unreachable!("6 is not a power of two"),
    }

    let mut set = CacheSet::new("Pseudo-LRU", 4)?;
    for tag in [100, 200, 300, 400, 500] {
        set.access(tag);
    }
    println!("  hits: {}, misses: {}\n", set.hits, set.misses);
    Ok(())
}

/// Demonstrates probing set_to_erase and falling back where unsupported
fn demo_invalidation() {
    println!("3. Invalidation");
    println!("---------------");

    for name in ["LRU", "Pseudo-LRU"] {
        let mut policy = create_replacement(name, 4)
            .expect("both demo policies construct with 4 ways");
        match policy.set_to_erase(2) {
            Ok(()) => println!(
                "  {name}: way 2 invalidated, next victim is {}",
                policy.update()
            ),
            Err(e) => println!("  {name}: falling back, {e}"),
        }
    }
}
