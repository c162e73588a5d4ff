pub mod fixed;
pub mod interner;
pub mod strategy;

pub use self::{
    fixed::{FixedInterner, ZeroCapacity},
    interner::Interner,
    strategy::{DefaultStrategy, FnStrategy, InternStrategy},
};
