//! Simulation engine for lineage recovery.
//!
//! This module provides the main simulation loop. Each generation runs, in
//! order:
//!
//! 1. an extinction pulse, on period boundaries;
//! 2. recolonization of a bounded number of dead slots;
//! 3. trait updates on every living lineage;
//! 4. diversity and innovation measurement;
//! 5. recovery detection.

use crate::base::RandomStreams;
use crate::errors::ConfigError;
use crate::evolution::{LifeStage, TraitOperators};
use crate::genome::{GenePool, Lineage};
use crate::simulation::population::birth_quota;
use crate::simulation::{Population, RecoveryTracker, SimulationConfig, SimulationResult};
use rand::Rng;
use tracing::{debug, info, trace};

/// What an extinction pulse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseReport {
    /// Living lineages immediately before the pulse
    pub alive_before: usize,
    pub killed: usize,
}

/// Readings for one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub generation: usize,
    pub pulse: Option<PulseReport>,
    /// Dead slots at the start of recolonization
    pub empty_slots: usize,
    pub births: usize,
    pub diversity: usize,
    pub innovation: usize,
    /// Set when this generation is the first recovery crossing of its window
    pub recovered_after: Option<usize>,
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    population: Population,
    gene_pool: GenePool,
    operators: TraitOperators,
    streams: RandomStreams,
    tracker: RecoveryTracker,
    generation: usize,
    diversity_ts: Vec<usize>,
    innovation: usize,
}

impl Simulation {
    /// Create a simulation from a validated configuration.
    ///
    /// Founder lineages are sampled first, then the gene pool, both from the
    /// sampling stream.
    ///
    /// # Errors
    /// Returns an error if any parameter is out of range.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let operators = config.operators()?;

        let mut streams = RandomStreams::from_seed(config.seed);
        let population = Population::random(
            streams.sampling(),
            config.n_lineages,
            config.trait_space,
            config.cryptic_size,
        );
        let gene_pool = GenePool::sample(streams.sampling(), config.pool_size);
        let tracker = RecoveryTracker::new(config.extinction_period, config.n_lineages);

        Ok(Self {
            diversity_ts: Vec::with_capacity(config.generations),
            config,
            population,
            gene_pool,
            operators,
            streams,
            tracker,
            generation: 0,
            innovation: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn gene_pool(&self) -> &GenePool {
        &self.gene_pool
    }

    pub fn tracker(&self) -> &RecoveryTracker {
        &self.tracker
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether the configured number of generations has run.
    pub fn is_complete(&self) -> bool {
        self.generation >= self.config.generations
    }

    /// Diversity recorded for each completed generation.
    pub fn diversity_ts(&self) -> &[usize] {
        &self.diversity_ts
    }

    fn extinction_pulse(&mut self) -> PulseReport {
        let alive_before = self.population.diversity();
        let killed = self.population.extinction_pulse(
            self.config.extinction_policy,
            self.config.extinction_fraction,
            self.streams.choice(),
        );
        debug!(
            generation = self.generation,
            alive_before, killed, "Extinction pulse"
        );
        PulseReport {
            alive_before,
            killed,
        }
    }

    /// Refill up to the birth quota of dead slots, in slot order.
    ///
    /// Parents are the lineages alive when recolonization starts. If none
    /// are alive, every child descends from one freshly sampled founder.
    fn recolonize(&mut self, empty_slots: usize) -> usize {
        let births = birth_quota(empty_slots, self.config.recolonization_rate);
        if births == 0 {
            return 0;
        }

        let parents = self.population.alive_indices();
        let founder = if parents.is_empty() {
            debug!(
                generation = self.generation,
                "No survivors, recolonizing from a synthesized founder"
            );
            Some(Lineage::random(
                self.streams.sampling(),
                self.config.trait_space,
                self.config.cryptic_size,
            ))
        } else {
            None
        };

        let slots = self.population.dead_indices();
        for &slot in slots.iter().take(births) {
            let mut child = match &founder {
                Some(founder) => Lineage::offspring(founder),
                None => {
                    let pick = self.streams.choice().random_range(0..parents.len());
                    let parent = &self.population.lineages()[parents[pick]];
                    Lineage::offspring(parent)
                }
            };
            let outcome = self.operators.apply(
                &mut child,
                LifeStage::Newborn,
                &self.gene_pool,
                self.streams.choice(),
            );
            trace!(slot, gained = outcome.gained(), "Recolonized slot");
            self.population.replace(slot, child);
        }

        births
    }

    fn update_traits(&mut self) {
        for lineage in self
            .population
            .lineages_mut()
            .iter_mut()
            .filter(|l| l.is_alive())
        {
            self.operators.apply(
                lineage,
                LifeStage::Established,
                &self.gene_pool,
                self.streams.choice(),
            );
        }
    }

    /// Advance the simulation by one generation.
    pub fn step(&mut self) -> GenerationReport {
        let generation = self.generation;

        let pulse = if self.config.is_pulse_generation(generation) {
            let report = self.extinction_pulse();
            self.tracker.open(report.alive_before);
            Some(report)
        } else {
            None
        };

        let empty_slots = self.population.empty_slots();
        let births = self.recolonize(empty_slots);
        self.update_traits();

        let diversity = self.population.diversity();
        self.innovation = self.population.innovation();
        self.diversity_ts.push(diversity);

        let recovered_after = self.tracker.observe(generation, diversity);
        self.tracker.close_if_due(generation, diversity);

        self.generation += 1;

        GenerationReport {
            generation,
            pulse,
            empty_slots,
            births,
            diversity,
            innovation: self.innovation,
            recovered_after,
        }
    }

    /// Run the remaining configured generations and return the result.
    pub fn run(&mut self) -> SimulationResult {
        info!(
            seed = self.config.seed,
            scenario = %self.config.scenario,
            n_lineages = self.config.n_lineages,
            generations = self.config.generations,
            "Running simulation"
        );
        while !self.is_complete() {
            self.step();
        }
        let result = self.result();
        info!(
            final_diversity = ?result.final_diversity(),
            innovation_total = result.innovation_total,
            recovery_time_gens = result.recovery_time_gens,
            "Simulation finished"
        );
        result
    }

    /// Run exactly `generations` more generations, ignoring the configured total.
    pub fn run_for(&mut self, generations: usize) -> Vec<GenerationReport> {
        (0..generations).map(|_| self.step()).collect()
    }

    /// Package the readings so far into a result record.
    pub fn result(&self) -> SimulationResult {
        SimulationResult {
            diversity_ts: self.diversity_ts.clone(),
            innovation_total: self.innovation,
            recovery_time_gens: self.tracker.recovery_time_gens(),
        }
    }
}

/// Run one full simulation.
///
/// This is the entry point for drivers: it validates `config`, runs every
/// generation and returns the result record.
///
/// # Errors
/// Returns an error if any parameter is out of range.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult, ConfigError> {
    let mut sim = Simulation::new(config.clone())?;
    Ok(sim.run())
}
