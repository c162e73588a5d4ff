use std::{hash::Hash, sync::Arc};

use hashbrown::HashSet;
use lossy_intern::Interner;
use parking_lot::Mutex;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// An unbounded exact interner, used as the correctness and hit-rate
/// baseline: every value equal to a previously interned one is a hit.
pub struct ExactInterner<T> {
    set: Mutex<HashSet<T>>,
}

impl<T> Default for ExactInterner<T> {
    fn default() -> Self {
        Self {
            set: Mutex::new(HashSet::new()),
        }
    }
}

impl<T: Clone + Hash + Eq> Interner<T> for ExactInterner<T> {
    fn intern(&self, value: T) -> T {
        let mut set = self.set.lock();
        if let Some(found) = set.get(&value) {
            found.clone()
        } else {
            set.insert(value.clone());
            value
        }
    }
}

/// Draws `total` decimal-string values uniformly from `distinct` identifiers
/// using a fixed seed, so every test and benchmark sees the same stream.
pub fn workload(distinct: u32, total: usize) -> Vec<Arc<str>> {
    let mut rng = SmallRng::seed_from_u64(1);
    (0..total)
        .map(|_| Arc::from(rng.gen_range(0..distinct).to_string().as_str()))
        .collect()
}

/// Interns every value in order and counts hits: a hit is a call that
/// returns a previously cached instance rather than the one supplied.
pub fn count_hits(interner: impl Interner<Arc<str>>, values: &[Arc<str>]) -> usize {
    let mut hits = 0;
    for value in values {
        let interned = interner.intern(value.clone());
        assert_eq!(interned, *value);
        if !Arc::ptr_eq(&interned, value) {
            hits += 1;
        }
    }
    hits
}
