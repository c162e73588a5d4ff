use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use ahash::AHasher;

/// A hash / equivalence pair that an interner consults to bucket values and
/// to decide whether two values should collapse to one representative.
///
/// Both functions must be total and deterministic, and `eq` must be an
/// equivalence relation. They may be called concurrently from any thread
/// interning through a shared interner, so they must not mutate shared state
/// or take locks.
pub trait InternStrategy<T> {
    fn hash(&self, value: &T) -> u64;

    fn eq(&self, a: &T, b: &T) -> bool;
}

/// The default strategy: the value's `Hash` impl driven through a
/// `BuildHasher`, with `Eq` for equivalence.
///
/// The default build hasher is `BuildHasherDefault<AHasher>`, which is
/// well-distributed and uses fixed keys, so slot assignment is stable from
/// run to run.
pub struct DefaultStrategy<S = BuildHasherDefault<AHasher>> {
    build_hasher: S,
}

impl<S: Default> Default for DefaultStrategy<S> {
    fn default() -> Self {
        Self {
            build_hasher: S::default(),
        }
    }
}

impl<S> DefaultStrategy<S> {
    pub fn with_hasher(build_hasher: S) -> Self {
        Self { build_hasher }
    }
}

impl<T: Hash + Eq, S: BuildHasher> InternStrategy<T> for DefaultStrategy<S> {
    fn hash(&self, value: &T) -> u64 {
        self.build_hasher.hash_one(value)
    }

    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// A strategy built from a pair of closures, for callers that want to trade
/// hash quality or equality semantics without changing the interner.
///
/// Useful when the intrinsic `Hash` impl clusters badly for the workload, or
/// when equivalence is coarser than `Eq` (for example, case-insensitive
/// strings).
pub struct FnStrategy<H, E> {
    hash: H,
    eq: E,
}

impl<H, E> FnStrategy<H, E> {
    // The bounds are repeated here so closure signatures are inferred at the
    // construction site.
    pub fn new<T>(hash: H, eq: E) -> Self
    where
        H: Fn(&T) -> u64,
        E: Fn(&T, &T) -> bool,
    {
        Self { hash, eq }
    }
}

impl<T, H, E> InternStrategy<T> for FnStrategy<H, E>
where
    H: Fn(&T) -> u64,
    E: Fn(&T, &T) -> bool,
{
    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }

    fn eq(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }
}
