//! Seeded random streams.
//!
//! A run consumes randomness from two independent generators derived from a
//! single seed:
//!
//! - the **choice** stream drives every discrete decision taken while the
//!   simulation runs (extinction draws, operator activation, parent
//!   selection, gene-pool draws, compatibility checks);
//! - the **sampling** stream builds the initial lineages, the gene pool and
//!   any founder lineage synthesized after a total extinction.
//!
//! Keeping the two apart means a change in how initial sets are sampled never
//! shifts the sequence of discrete decisions, and vice versa.

use crate::base::{TraitId, TraitSet};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generator used for all simulation randomness.
pub type SimRng = Xoshiro256PlusPlus;

/// The pair of generators owned by a single simulation run.
#[derive(Debug, Clone)]
pub struct RandomStreams {
    choice: SimRng,
    sampling: SimRng,
}

impl RandomStreams {
    /// Derive both streams from `seed`.
    ///
    /// The sampling stream starts 2^128 draws ahead of the choice stream
    /// (one Xoshiro jump), so the two never overlap.
    pub fn from_seed(seed: u64) -> Self {
        let choice = SimRng::seed_from_u64(seed);
        let mut sampling = choice.clone();
        sampling.jump();
        Self { choice, sampling }
    }

    /// Stream for discrete in-run decisions.
    pub fn choice(&mut self) -> &mut SimRng {
        &mut self.choice
    }

    /// Stream for set sampling (initial lineages, gene pool, founders).
    pub fn sampling(&mut self) -> &mut SimRng {
        &mut self.sampling
    }
}

/// Sample `amount` distinct identifiers from `[0, space)`.
///
/// `amount` is clamped to `space`. The identifiers are returned in sampling
/// order.
pub fn sample_distinct<R: Rng + ?Sized>(rng: &mut R, space: u64, amount: usize) -> Vec<TraitId> {
    let space = usize::try_from(space).unwrap_or(usize::MAX);
    let amount = amount.min(space);
    index::sample(rng, space, amount)
        .into_iter()
        .map(|i| i as TraitId)
        .collect()
}

/// Pick a uniformly random member of `set`, or `None` if it is empty.
pub fn choose_member<R: Rng + ?Sized>(rng: &mut R, set: &TraitSet) -> Option<TraitId> {
    if set.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..set.len());
    set.iter().nth(idx).copied()
}
