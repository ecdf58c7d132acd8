//! Lateral (horizontal) gene transfer.
//!
//! When transfer fires, traits are drawn uniformly from the gene pool. Each
//! drawn trait passes a compatibility filter: it is kept only if a fresh
//! uniform draw falls below `compatibility_tau`.

use crate::errors::{check_probability, ConfigError};
use crate::evolution::LifeStage;
use crate::genome::{GenePool, Lineage};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Scaling applied to the transfer rate for established lineages.
pub const ESTABLISHED_RATE_FACTOR: f64 = 0.05;

/// Most traits a newborn can draw in one transfer event.
pub const NEWBORN_MAX_DRAWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralTransfer {
    rate: f64,
    compatibility_tau: f64,
}

impl LateralTransfer {
    /// # Errors
    /// Returns an error if `rate` or `compatibility_tau` is outside `[0, 1]`.
    pub fn new(rate: f64, compatibility_tau: f64) -> Result<Self, ConfigError> {
        check_probability("hgt_rate", rate)?;
        check_probability("compatibility_tau", compatibility_tau)?;
        Ok(Self {
            rate,
            compatibility_tau,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn compatibility_tau(&self) -> f64 {
        self.compatibility_tau
    }

    /// Probability that a transfer event fires this generation.
    pub fn probability(&self, stage: LifeStage) -> f64 {
        match stage {
            LifeStage::Newborn => self.rate,
            LifeStage::Established => self.rate * ESTABLISHED_RATE_FACTOR,
        }
    }

    /// Attempt one transfer event on `lineage`.
    ///
    /// Newborns draw 1 to [`NEWBORN_MAX_DRAWS`] traits, established lineages
    /// draw one. An empty pool skips the operator without consuming
    /// randomness. Returns the number of traits newly expressed.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        lineage: &mut Lineage,
        stage: LifeStage,
        pool: &GenePool,
        rng: &mut R,
    ) -> usize {
        if pool.is_empty() {
            return 0;
        }
        if rng.random::<f64>() >= self.probability(stage) {
            return 0;
        }

        let draws = match stage {
            LifeStage::Newborn => rng.random_range(1..=NEWBORN_MAX_DRAWS),
            LifeStage::Established => 1,
        };

        let mut gained = 0;
        for _ in 0..draws {
            let Some(trait_id) = pool.draw(rng) else {
                break;
            };
            if rng.random::<f64>() < self.compatibility_tau && lineage.express(trait_id) {
                gained += 1;
            }
        }
        gained
    }
}
