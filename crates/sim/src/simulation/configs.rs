//! Simulation parameters and configuration.
//!
//! This module provides the configuration record consumed by the engine. It
//! can be deserialized from JSON to fully reproduce a run: a fixed seed and a
//! fixed configuration always yield the same result.

use crate::errors::{check_probability, ConfigError};
use crate::evolution::{CrypticActivation, LateralTransfer, Scenario, TraitOperators};
use crate::genome::{BASELINE_TRAITS, CRYPTIC_SPACE_FACTOR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the lineages killed by an extinction pulse are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtinctionPolicy {
    /// Each living lineage dies independently with probability
    /// `extinction_fraction`.
    #[default]
    Bernoulli,
    /// The first `floor(alive * extinction_fraction)` living lineages, in slot
    /// order, die. Consumes no randomness.
    Truncation,
}

impl ExtinctionPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExtinctionPolicy::Bernoulli => "bernoulli",
            ExtinctionPolicy::Truncation => "truncation",
        }
    }
}

impl fmt::Display for ExtinctionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtinctionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bernoulli" => Ok(ExtinctionPolicy::Bernoulli),
            "truncation" => Ok(ExtinctionPolicy::Truncation),
            other => Err(ConfigError::UnknownExtinctionPolicy(other.to_string())),
        }
    }
}

/// Complete configuration of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for both random streams
    pub seed: u64,
    /// Number of population slots (carrying capacity)
    pub n_lineages: usize,
    /// Number of generations to simulate
    pub generations: usize,
    /// Generations between extinction pulses
    pub extinction_period: usize,
    /// Fraction of living lineages killed by each pulse
    pub extinction_fraction: f64,
    pub extinction_policy: ExtinctionPolicy,
    /// Lateral transfer probability for newborns
    pub hgt_rate: f64,
    /// Number of cryptic traits per founder lineage
    pub cryptic_size: usize,
    /// Probability that a transferred trait is compatible
    pub compatibility_tau: f64,
    pub scenario: Scenario,
    /// Size of the expressed trait space
    pub trait_space: u64,
    /// Size of the identifier space the gene pool is drawn from
    pub pool_size: u64,
    /// Fraction of empty slots refilled per generation
    pub recolonization_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            n_lineages: 500,
            generations: 800,
            extinction_period: 200,
            extinction_fraction: 0.6,
            extinction_policy: ExtinctionPolicy::Bernoulli,
            hgt_rate: 0.08,
            cryptic_size: 20,
            compatibility_tau: 0.5,
            scenario: Scenario::Classical,
            trait_space: 2000,
            pool_size: 10_000,
            recolonization_rate: 0.2,
        }
    }
}

impl SimulationConfig {
    /// Check that every parameter is in range.
    ///
    /// # Errors
    /// Returns the first out-of-range parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("extinction_fraction", self.extinction_fraction)?;
        check_probability("hgt_rate", self.hgt_rate)?;
        check_probability("compatibility_tau", self.compatibility_tau)?;
        check_probability("recolonization_rate", self.recolonization_rate)?;

        if self.extinction_period == 0 {
            return Err(ConfigError::ZeroExtinctionPeriod);
        }

        if self.trait_space < BASELINE_TRAITS as u64 {
            return Err(ConfigError::TraitSpaceTooSmall {
                trait_space: self.trait_space,
                required: BASELINE_TRAITS,
            });
        }

        let space = self.cryptic_space();
        if self.cryptic_size as u64 > space {
            return Err(ConfigError::CrypticSizeTooLarge {
                cryptic_size: self.cryptic_size,
                space,
            });
        }

        Ok(())
    }

    /// Size of the identifier space cryptic traits are drawn from.
    pub fn cryptic_space(&self) -> u64 {
        self.trait_space.saturating_mul(CRYPTIC_SPACE_FACTOR)
    }

    /// Whether generation `generation` begins with an extinction pulse.
    pub fn is_pulse_generation(&self, generation: usize) -> bool {
        generation > 0 && generation % self.extinction_period == 0
    }

    /// Build the operator bundle for this configuration's scenario.
    ///
    /// # Errors
    /// Returns an error if the transfer parameters are out of range.
    pub fn operators(&self) -> Result<TraitOperators, ConfigError> {
        Ok(TraitOperators::new(
            self.scenario,
            CrypticActivation::default(),
            LateralTransfer::new(self.hgt_rate, self.compatibility_tau)?,
        ))
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
