//! Trait identifiers.
//!
//! Traits are opaque integer identifiers drawn from a bounded trait space.
//! Sets of traits use `BTreeSet` so that iteration order, and therefore the
//! mapping from a random index to a member, is identical on every run.

use std::collections::BTreeSet;

/// Identifier of a single heritable trait.
pub type TraitId = u64;

/// A set of trait identifiers with deterministic iteration order.
pub type TraitSet = BTreeSet<TraitId>;
