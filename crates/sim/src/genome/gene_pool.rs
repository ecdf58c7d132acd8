//! The environmental gene pool used as the lateral-transfer source.

use crate::base::{sample_distinct, TraitId};
use rand::Rng;

/// Upper bound on the number of identifiers kept in a gene pool.
pub const GENE_POOL_CAP: usize = 5000;

/// A fixed sample of trait identifiers, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenePool {
    traits: Vec<TraitId>,
}

impl GenePool {
    /// Sample `min(pool_size, GENE_POOL_CAP)` distinct identifiers from
    /// `[0, pool_size)`.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, pool_size: u64) -> Self {
        let amount = usize::try_from(pool_size)
            .unwrap_or(usize::MAX)
            .min(GENE_POOL_CAP);
        Self {
            traits: sample_distinct(rng, pool_size, amount),
        }
    }

    /// Build a pool from explicit identifiers.
    pub fn from_traits(traits: Vec<TraitId>) -> Self {
        Self { traits }
    }

    /// Draw one identifier uniformly, or `None` for an empty pool.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<TraitId> {
        if self.traits.is_empty() {
            return None;
        }
        Some(self.traits[rng.random_range(0..self.traits.len())])
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    pub fn as_slice(&self) -> &[TraitId] {
        &self.traits
    }
}
