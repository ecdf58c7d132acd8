//! Cryptic activation.
//!
//! A lineage carries latent genetic material (its cryptic set) that can be
//! switched on. When activation fires, one uniformly chosen cryptic trait is
//! copied into the expressed set; the cryptic set itself is never depleted.

use crate::base::{choose_member, TraitId};
use crate::errors::{check_probability, ConfigError};
use crate::evolution::LifeStage;
use crate::genome::Lineage;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-generation activation probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrypticActivation {
    newborn_prob: f64,
    established_prob: f64,
}

impl Default for CrypticActivation {
    fn default() -> Self {
        Self {
            newborn_prob: Self::NEWBORN_PROB,
            established_prob: Self::ESTABLISHED_PROB,
        }
    }
}

impl CrypticActivation {
    /// Activation probability applied once to a lineage at creation.
    pub const NEWBORN_PROB: f64 = 0.02;
    /// Activation probability applied to every living lineage each generation.
    pub const ESTABLISHED_PROB: f64 = 0.01;

    /// Create an operator with custom probabilities.
    ///
    /// # Errors
    /// Returns an error if either probability is outside `[0, 1]`.
    pub fn new(newborn_prob: f64, established_prob: f64) -> Result<Self, ConfigError> {
        check_probability("newborn_prob", newborn_prob)?;
        check_probability("established_prob", established_prob)?;
        Ok(Self {
            newborn_prob,
            established_prob,
        })
    }

    pub fn probability(&self, stage: LifeStage) -> f64 {
        match stage {
            LifeStage::Newborn => self.newborn_prob,
            LifeStage::Established => self.established_prob,
        }
    }

    /// Attempt one activation on `lineage`.
    ///
    /// No randomness is consumed when the cryptic set is empty. Returns the
    /// activated trait when the operator fires and the trait was not
    /// already expressed.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        lineage: &mut Lineage,
        stage: LifeStage,
        rng: &mut R,
    ) -> Option<TraitId> {
        if lineage.cryptic().is_empty() {
            return None;
        }
        if rng.random::<f64>() >= self.probability(stage) {
            return None;
        }
        let trait_id = choose_member(rng, lineage.cryptic())?;
        lineage.express(trait_id).then_some(trait_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{SimRng, TraitSet};
    use rand::SeedableRng;

    fn lineage_with_cryptic(cryptic: &[u64]) -> Lineage {
        Lineage::new(
            TraitSet::from([1, 2, 3, 4, 5]),
            cryptic.iter().copied().collect(),
        )
    }

    #[test]
    fn test_default_probabilities() {
        let op = CrypticActivation::default();
        assert_eq!(op.probability(LifeStage::Newborn), 0.02);
        assert_eq!(op.probability(LifeStage::Established), 0.01);
    }

    #[test]
    fn test_invalid_probability() {
        assert!(CrypticActivation::new(1.2, 0.0).is_err());
        assert!(CrypticActivation::new(0.0, -0.5).is_err());
    }

    #[test]
    fn test_certain_activation_moves_cryptic_trait() {
        let op = CrypticActivation::new(1.0, 1.0).unwrap();
        let mut rng = SimRng::seed_from_u64(42);
        let mut lineage = lineage_with_cryptic(&[100, 200, 300]);

        let activated = op.apply(&mut lineage, LifeStage::Newborn, &mut rng).unwrap();

        assert!(lineage.traits().contains(&activated));
        assert!(lineage.cryptic().contains(&activated));
        assert_eq!(lineage.cryptic().len(), 3);
        assert_eq!(lineage.innovation(), 1);
    }

    #[test]
    fn test_zero_probability_never_fires() {
        let op = CrypticActivation::new(0.0, 0.0).unwrap();
        let mut rng = SimRng::seed_from_u64(42);
        let mut lineage = lineage_with_cryptic(&[100, 200]);

        for _ in 0..100 {
            assert_eq!(op.apply(&mut lineage, LifeStage::Established, &mut rng), None);
        }
        assert_eq!(lineage.innovation(), 0);
    }

    #[test]
    fn test_empty_cryptic_consumes_no_randomness() {
        let op = CrypticActivation::new(1.0, 1.0).unwrap();
        let mut rng = SimRng::seed_from_u64(42);
        let untouched = rng.clone();
        let mut lineage = lineage_with_cryptic(&[]);

        assert_eq!(op.apply(&mut lineage, LifeStage::Newborn, &mut rng), None);
        assert_eq!(rng, untouched);
    }

    #[test]
    fn test_activation_of_expressed_trait_is_not_reported() {
        let op = CrypticActivation::new(1.0, 1.0).unwrap();
        let mut rng = SimRng::seed_from_u64(42);
        let mut lineage = Lineage::new(TraitSet::from([1, 2, 3, 4, 5]), TraitSet::from([3]));

        assert_eq!(op.apply(&mut lineage, LifeStage::Newborn, &mut rng), None);
        assert_eq!(lineage.innovation(), 0);
    }

    #[test]
    fn test_activation_saturates() {
        let op = CrypticActivation::new(1.0, 1.0).unwrap();
        let mut rng = SimRng::seed_from_u64(9);
        let mut lineage = lineage_with_cryptic(&[100, 200]);

        for _ in 0..200 {
            op.apply(&mut lineage, LifeStage::Established, &mut rng);
        }
        assert_eq!(lineage.innovation(), 2);
    }
}
