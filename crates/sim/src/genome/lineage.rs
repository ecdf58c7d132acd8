//! A single simulated lineage.
//!
//! A lineage carries two trait sets: the expressed `traits`, which start as
//! [`BASELINE_TRAITS`] distinct identifiers, and the latent `cryptic` set,
//! sampled once at creation from a trait space [`CRYPTIC_SPACE_FACTOR`] times
//! larger. Traits beyond the baseline count are innovation.

use crate::base::{sample_distinct, TraitId, TraitSet};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of expressed traits every founder lineage starts with.
pub const BASELINE_TRAITS: usize = 5;

/// Ratio of the cryptic trait space to the expressed trait space.
pub const CRYPTIC_SPACE_FACTOR: u64 = 5;

/// One slot of the population.
///
/// A dead lineage keeps whatever sets it had when it died. Nothing reads
/// them while it is dead and recolonization replaces the slot wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineage {
    alive: bool,
    traits: TraitSet,
    cryptic: TraitSet,
}

impl Lineage {
    /// Create a living lineage from explicit trait sets.
    pub fn new(traits: TraitSet, cryptic: TraitSet) -> Self {
        Self {
            alive: true,
            traits,
            cryptic,
        }
    }

    /// Sample a founder lineage.
    ///
    /// Draws [`BASELINE_TRAITS`] distinct traits from `[0, trait_space)` and
    /// `cryptic_size` distinct cryptic traits from
    /// `[0, trait_space * CRYPTIC_SPACE_FACTOR)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, trait_space: u64, cryptic_size: usize) -> Self {
        let traits = sample_distinct(rng, trait_space, BASELINE_TRAITS);
        let cryptic = sample_distinct(
            rng,
            trait_space.saturating_mul(CRYPTIC_SPACE_FACTOR),
            cryptic_size,
        );
        Self::new(traits.into_iter().collect(), cryptic.into_iter().collect())
    }

    /// Asexual offspring: a living deep copy of `parent`'s trait sets.
    pub fn offspring(parent: &Lineage) -> Self {
        Self {
            alive: true,
            traits: parent.traits.clone(),
            cryptic: parent.cryptic.clone(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the lineage dead. Trait sets are left untouched.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Expressed traits.
    pub fn traits(&self) -> &TraitSet {
        &self.traits
    }

    /// Latent traits available for activation.
    pub fn cryptic(&self) -> &TraitSet {
        &self.cryptic
    }

    /// Add `trait_id` to the expressed set. Returns `true` if it was new.
    pub fn express(&mut self, trait_id: TraitId) -> bool {
        self.traits.insert(trait_id)
    }

    pub fn expressed_count(&self) -> usize {
        self.traits.len()
    }

    /// Expressed traits beyond the founding baseline.
    pub fn innovation(&self) -> usize {
        self.expressed_count().saturating_sub(BASELINE_TRAITS)
    }
}
