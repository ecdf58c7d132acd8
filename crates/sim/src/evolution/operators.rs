//! The operator bundle applied to a lineage in one update.

use crate::base::TraitId;
use crate::evolution::{CrypticActivation, LateralTransfer, LifeStage, OperatorSet, Scenario};
use crate::genome::{GenePool, Lineage};
use rand::Rng;

/// What a single operator pass did to a lineage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationOutcome {
    pub activated: Option<TraitId>,
    pub transferred: usize,
}

impl MutationOutcome {
    /// Number of expressed traits gained.
    pub fn gained(&self) -> usize {
        usize::from(self.activated.is_some()) + self.transferred
    }
}

/// Cryptic activation and lateral transfer, gated by a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitOperators {
    enabled: OperatorSet,
    activation: CrypticActivation,
    transfer: LateralTransfer,
}

impl TraitOperators {
    pub fn new(scenario: Scenario, activation: CrypticActivation, transfer: LateralTransfer) -> Self {
        Self {
            enabled: scenario.operators(),
            activation,
            transfer,
        }
    }

    pub fn enabled(&self) -> OperatorSet {
        self.enabled
    }

    /// Run the enabled operators on `lineage`, cryptic activation first.
    ///
    /// Disabled operators consume no randomness.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        lineage: &mut Lineage,
        stage: LifeStage,
        pool: &GenePool,
        rng: &mut R,
    ) -> MutationOutcome {
        let mut outcome = MutationOutcome::default();
        if self.enabled.cryptic {
            outcome.activated = self.activation.apply(lineage, stage, rng);
        }
        if self.enabled.hgt {
            outcome.transferred = self.transfer.apply(lineage, stage, pool, rng);
        }
        outcome
    }
}
