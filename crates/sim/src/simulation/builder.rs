//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations. Every
//! parameter starts at its [`SimulationConfig`] default and is validated once,
//! in [`SimulationBuilder::build`].

use crate::errors::ConfigError;
use crate::evolution::Scenario;
use crate::simulation::{ExtinctionPolicy, Simulation, SimulationConfig};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use brt_sim::simulation::SimulationBuilder;
/// use brt_sim::evolution::Scenario;
///
/// // Simple simulation with defaults
/// let sim = SimulationBuilder::new()
///     .n_lineages(100)
///     .generations(50)
///     .build()
///     .unwrap();
///
/// // Full model with a pulse every 10 generations
/// let mut sim = SimulationBuilder::new()
///     .n_lineages(100)
///     .generations(50)
///     .extinction_period(10)
///     .extinction_fraction(0.8)
///     .scenario(Scenario::BrtFull)
///     .seed(42)
///     .build()
///     .unwrap();
/// let result = sim.run();
/// assert_eq!(result.diversity_ts.len(), 50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: SimulationConfig,
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the number of population slots.
    pub fn n_lineages(mut self, n_lineages: usize) -> Self {
        self.config.n_lineages = n_lineages;
        self
    }

    /// Set the number of generations to run.
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    pub fn extinction_period(mut self, period: usize) -> Self {
        self.config.extinction_period = period;
        self
    }

    pub fn extinction_fraction(mut self, fraction: f64) -> Self {
        self.config.extinction_fraction = fraction;
        self
    }

    pub fn extinction_policy(mut self, policy: ExtinctionPolicy) -> Self {
        self.config.extinction_policy = policy;
        self
    }

    pub fn hgt_rate(mut self, rate: f64) -> Self {
        self.config.hgt_rate = rate;
        self
    }

    pub fn cryptic_size(mut self, size: usize) -> Self {
        self.config.cryptic_size = size;
        self
    }

    pub fn compatibility_tau(mut self, tau: f64) -> Self {
        self.config.compatibility_tau = tau;
        self
    }

    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.config.scenario = scenario;
        self
    }

    pub fn trait_space(mut self, space: u64) -> Self {
        self.config.trait_space = space;
        self
    }

    pub fn pool_size(mut self, size: u64) -> Self {
        self.config.pool_size = size;
        self
    }

    pub fn recolonization_rate(mut self, rate: f64) -> Self {
        self.config.recolonization_rate = rate;
        self
    }

    /// Configuration as currently set, not yet validated.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn into_config(self) -> SimulationConfig {
        self.config
    }

    /// Build the simulation.
    ///
    /// # Errors
    /// Returns an error if any parameter is out of range.
    pub fn build(self) -> Result<Simulation, ConfigError> {
        Simulation::new(self.config)
    }
}
