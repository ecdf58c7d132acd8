//! Trait identifiers and the seeded random streams shared by every module.

pub mod random;
pub mod traits;

pub use random::{choose_member, sample_distinct, RandomStreams, SimRng};
pub use traits::{TraitId, TraitSet};
