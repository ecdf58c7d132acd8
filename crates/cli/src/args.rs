use anyhow::{Context, Result};
use brt_sim::evolution::Scenario;
use brt_sim::simulation::{ExtinctionPolicy, OccupancyConfig, SimulationConfig};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Base configuration (JSON). Missing fields take library defaults.
    ///
    /// Flags given on the command line override values from the file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = defaults::OUTPUT_DIR)]
    pub output: PathBuf,

    /// Replicates per scenario
    #[arg(short, long, default_value_t = defaults::REPS)]
    pub reps: usize,

    /// Seed of the first replicate; replicate r uses base_seed + r
    #[arg(long, default_value_t = defaults::BASE_SEED)]
    pub base_seed: u64,

    /// Scenario to run (repeatable). Runs all four if omitted.
    #[arg(short, long = "scenario")]
    pub scenarios: Vec<Scenario>,

    /// Number of generations [default: 800]
    #[arg(short, long)]
    pub generations: Option<usize>,

    /// Number of lineage slots [default: 400]
    #[arg(short, long)]
    pub n_lineages: Option<usize>,

    /// Generations between extinction pulses
    #[arg(long)]
    pub extinction_period: Option<usize>,

    /// Fraction of living lineages killed per pulse
    #[arg(long)]
    pub extinction_fraction: Option<f64>,

    /// How pulse victims are chosen (bernoulli, truncation)
    #[arg(long)]
    pub extinction_policy: Option<ExtinctionPolicy>,

    /// Lateral transfer probability for newborns
    #[arg(long)]
    pub hgt_rate: Option<f64>,

    /// Cryptic traits per founder lineage
    #[arg(long)]
    pub cryptic_size: Option<usize>,

    /// Probability that a transferred trait is compatible
    #[arg(long)]
    pub compatibility_tau: Option<f64>,

    /// Fraction of empty slots refilled per generation
    #[arg(long)]
    pub recolonization_rate: Option<f64>,

    /// Skip the diversity figure
    #[arg(long)]
    pub no_figure: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

impl RunArgs {
    /// Scenarios to sweep, in reporting order without duplicates.
    pub fn scenarios(&self) -> Vec<Scenario> {
        if self.scenarios.is_empty() {
            return Scenario::ALL.to_vec();
        }
        Scenario::ALL
            .into_iter()
            .filter(|s| self.scenarios.contains(s))
            .collect()
    }

    /// Seed of each replicate, in replicate order.
    ///
    /// # Errors
    /// Returns an error if a replicate seed would not fit in a `u64`.
    pub fn replicate_seeds(&self) -> Result<Vec<u64>> {
        (0..self.reps)
            .map(|r| self.base_seed.checked_add(r as u64))
            .collect::<Option<Vec<u64>>>()
            .with_context(|| {
                format!(
                    "Seed range overflows: --base-seed {} with {} replicates exceeds {}",
                    self.base_seed,
                    self.reps,
                    u64::MAX
                )
            })
    }

    /// Base configuration for every run of the sweep.
    pub fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                SimulationConfig::from_json(&json)
                    .with_context(|| format!("Failed to load config {}", path.display()))?
            }
            None => SimulationConfig {
                generations: defaults::GENERATIONS,
                n_lineages: defaults::N_LINEAGES,
                ..Default::default()
            },
        };

        if let Some(v) = self.generations {
            config.generations = v;
        }
        if let Some(v) = self.n_lineages {
            config.n_lineages = v;
        }
        if let Some(v) = self.extinction_period {
            config.extinction_period = v;
        }
        if let Some(v) = self.extinction_fraction {
            config.extinction_fraction = v;
        }
        if let Some(v) = self.extinction_policy {
            config.extinction_policy = v;
        }
        if let Some(v) = self.hgt_rate {
            config.hgt_rate = v;
        }
        if let Some(v) = self.cryptic_size {
            config.cryptic_size = v;
        }
        if let Some(v) = self.compatibility_tau {
            config.compatibility_tau = v;
        }
        if let Some(v) = self.recolonization_rate {
            config.recolonization_rate = v;
        }

        config.validate().context("Invalid simulation configuration")?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct OccupancyArgs {
    /// Transfer propensity [default: 0.5]
    #[arg(long)]
    pub beta: Option<f64>,

    /// Spontaneous loss rate [default: 0.001]
    #[arg(long)]
    pub mu: Option<f64>,

    /// Carrying cost [default: 0.01]
    #[arg(long)]
    pub phi: Option<f64>,

    /// Number of lineages [default: 10000]
    #[arg(long)]
    pub lineages: Option<usize>,

    /// End of the time grid [default: 200]
    #[arg(long)]
    pub t_max: Option<f64>,

    /// Number of time points [default: 1000]
    #[arg(long)]
    pub steps: Option<usize>,

    /// Random seed [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory
    #[arg(short, long, default_value = defaults::OUTPUT_DIR)]
    pub output: PathBuf,
}

impl OccupancyArgs {
    pub fn resolve_config(&self) -> OccupancyConfig {
        let d = OccupancyConfig::default();
        OccupancyConfig {
            beta: self.beta.unwrap_or(d.beta),
            mu: self.mu.unwrap_or(d.mu),
            phi: self.phi.unwrap_or(d.phi),
            lineages: self.lineages.unwrap_or(d.lineages),
            t_max: self.t_max.unwrap_or(d.t_max),
            steps: self.steps.unwrap_or(d.steps),
            seed: self.seed.unwrap_or(d.seed),
        }
    }
}
