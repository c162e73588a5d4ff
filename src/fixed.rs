use std::fmt;

use parking_lot::Mutex;
use thiserror::Error;

use crate::{DefaultStrategy, InternStrategy, Interner};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("interner capacity must be nonzero")]
pub struct ZeroCapacity;

/// A fixed-capacity, lossy interning cache.
///
/// The cache owns exactly `capacity` slots, allocated once at construction
/// and never resized. Each value is bucketed into the single slot at
/// `hash(value) % capacity`; there is no probing, no chaining, and no
/// explicit eviction bookkeeping. Two non-equivalent values that hash to the
/// same slot simply overwrite one another, so a previously interned value is
/// never *guaranteed* to produce a hit. The structure trades deduplication
/// accuracy for a hard memory ceiling and constant-time operations.
///
/// Hit rate is a function of load factor and hash quality: it degrades as
/// the number of live distinct values approaches `capacity`, or when the
/// strategy's hash clusters values into few slots. A caller-supplied
/// [`InternStrategy`] can raise the hit rate without changing the algorithm.
///
/// Interning goes through `&self` and every slot is an independently locked
/// cell, so a `FixedInterner` can be shared freely across threads. A slot
/// lock is held only to clone or replace the occupant, never while running
/// strategy code. When two threads race non-equivalent values into one slot,
/// both observe a miss and the last store wins.
pub struct FixedInterner<T, S = DefaultStrategy> {
    slots: Box<[Mutex<Option<T>>]>,
    strategy: S,
}

impl<T> FixedInterner<T> {
    /// Creates an interner with `capacity` slots and the default strategy
    /// (intrinsic `Hash` through `ahash`, equivalence by `Eq`).
    ///
    /// Fails without allocating if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ZeroCapacity> {
        Self::with_strategy(capacity, DefaultStrategy::default())
    }
}

impl<T, S> FixedInterner<T, S> {
    /// Creates an interner with `capacity` slots and a caller-supplied
    /// hash / equivalence strategy.
    ///
    /// Fails without allocating if `capacity` is zero.
    pub fn with_strategy(capacity: usize, strategy: S) -> Result<Self, ZeroCapacity> {
        if capacity == 0 {
            return Err(ZeroCapacity);
        }

        Ok(Self {
            slots: (0..capacity).map(|_| Mutex::new(None)).collect(),
            strategy,
        })
    }

    /// The number of slots, fixed for the lifetime of the interner.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T: Clone, S: InternStrategy<T>> FixedInterner<T, S> {
    /// Returns the canonical representative for `value`.
    ///
    /// If the target slot holds an equivalent value, that original instance
    /// is returned unchanged and the slot is not rewritten, preserving
    /// instance identity for callers relying on it. Otherwise `value` is
    /// stored (evicting any non-equivalent occupant without notice) and
    /// returned back as the new representative.
    ///
    /// A panic in the strategy's `hash` or `eq` propagates to the caller and
    /// leaves the slot table unmodified; both run outside the slot lock.
    pub fn intern(&self, value: T) -> T {
        let slot = &self.slots[self.slot_index(&value)];

        let occupant = slot.lock().clone();
        if let Some(occupant) = occupant {
            if self.strategy.eq(&occupant, &value) {
                return occupant;
            }
        }

        *slot.lock() = Some(value.clone());
        value
    }

    // Plain unsigned modulo keeps any 64-bit hash in range for any capacity.
    fn slot_index(&self, value: &T) -> usize {
        (self.strategy.hash(value) % self.slots.len() as u64) as usize
    }
}

impl<T, S> fmt::Debug for FixedInterner<T, S> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("FixedInterner")
            .field("capacity", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl<T: Clone, S: InternStrategy<T>> Interner<T> for FixedInterner<T, S> {
    fn intern(&self, value: T) -> T {
        FixedInterner::intern(self, value)
    }
}
