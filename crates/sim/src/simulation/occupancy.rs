//! Mean-field model of accessory-module occupancy.
//!
//! Each of `lineages` lineages carries an occupancy level `x` in `[0, 1]`.
//! At every time point a lineage gains the module with probability
//! `beta * mean(x) * (1 - x) * dt` and loses it with probability
//! `(mu + phi) * x * dt`. Gains and losses are both drawn against the
//! occupancy at the start of the step, then applied together and clipped.

use crate::base::SimRng;
use crate::errors::OccupancyError;
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters of the occupancy model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupancyConfig {
    /// Transfer propensity
    pub beta: f64,
    /// Spontaneous loss rate
    pub mu: f64,
    /// Carrying cost
    pub phi: f64,
    pub lineages: usize,
    /// End of the time grid; the grid starts at 0
    pub t_max: f64,
    /// Number of time points, both ends included
    pub steps: usize,
    pub seed: u64,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            beta: 0.5,
            mu: 1e-3,
            phi: 1e-2,
            lineages: 10_000,
            t_max: 200.0,
            steps: 1000,
            seed: 42,
        }
    }
}

impl OccupancyConfig {
    /// # Errors
    /// Returns an error for a negative or non-finite rate, or a time grid
    /// with fewer than two points or a non-positive end.
    pub fn validate(&self) -> Result<(), OccupancyError> {
        for (name, value) in [("beta", self.beta), ("mu", self.mu), ("phi", self.phi)] {
            if !value.is_finite() || value < 0.0 {
                return Err(OccupancyError::InvalidRate { name, value });
            }
        }
        if !(self.t_max.is_finite() && self.t_max > 0.0) {
            return Err(OccupancyError::InvalidTimeGrid(format!(
                "t_max must be positive, got {}",
                self.t_max
            )));
        }
        if self.steps < 2 {
            return Err(OccupancyError::InvalidTimeGrid(format!(
                "at least 2 time points are required, got {}",
                self.steps
            )));
        }
        Ok(())
    }

    /// Spacing between consecutive time points, 0 for a grid with fewer
    /// than two points.
    pub fn dt(&self) -> f64 {
        match self.steps {
            0 | 1 => 0.0,
            n => self.t_max / (n - 1) as f64,
        }
    }

    /// Evenly spaced time points from 0 to `t_max` inclusive.
    ///
    /// A single-point grid is `[0.0]`.
    pub fn time_grid(&self) -> Vec<f64> {
        let dt = self.dt();
        (0..self.steps)
            .map(|i| {
                if i > 0 && i + 1 == self.steps {
                    self.t_max
                } else {
                    i as f64 * dt
                }
            })
            .collect()
    }
}

/// Mean occupancy recorded after each time point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyTrajectory {
    pub time: Vec<f64>,
    pub mean_occupancy: Vec<f64>,
}

impl OccupancyTrajectory {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// `(time, mean occupancy)` pairs in time order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .copied()
            .zip(self.mean_occupancy.iter().copied())
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn bernoulli<R: Rng + ?Sized>(rng: &mut R, p: f64) -> f64 {
    // p is clipped to [0, 1] so construction cannot fail
    match Bernoulli::new(p.clamp(0.0, 1.0)) {
        Ok(dist) if dist.sample(rng) => 1.0,
        _ => 0.0,
    }
}

/// Run the occupancy model.
///
/// # Errors
/// Returns an error if `config` fails validation.
pub fn run_occupancy(config: &OccupancyConfig) -> Result<OccupancyTrajectory, OccupancyError> {
    config.validate()?;

    let mut rng = SimRng::seed_from_u64(config.seed);
    let time = config.time_grid();
    let dt = config.dt();
    let loss_rate = config.mu + config.phi;

    let mut x: Vec<f64> = (0..config.lineages).map(|_| rng.random::<f64>()).collect();
    let mut mean_occupancy = Vec::with_capacity(time.len());

    for _ in &time {
        let m = mean(&x);
        let gains: Vec<f64> = x
            .iter()
            .map(|&xi| bernoulli(&mut rng, config.beta * m * (1.0 - xi) * dt))
            .collect();
        let losses: Vec<f64> = x
            .iter()
            .map(|&xi| bernoulli(&mut rng, loss_rate * xi * dt))
            .collect();

        for ((xi, gain), loss) in x.iter_mut().zip(gains).zip(losses) {
            *xi = (*xi + gain - loss).clamp(0.0, 1.0);
        }
        mean_occupancy.push(mean(&x));
    }

    debug!(
        lineages = config.lineages,
        steps = config.steps,
        final_occupancy = mean_occupancy.last().copied().unwrap_or(0.0),
        "Occupancy model finished"
    );

    Ok(OccupancyTrajectory {
        time,
        mean_occupancy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> OccupancyConfig {
        OccupancyConfig {
            lineages: 200,
            steps: 50,
            t_max: 20.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_time_grid() {
        let config = OccupancyConfig::default();
        let grid = config.time_grid();

        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[999], 200.0);
        assert!((config.dt() - 200.0 / 999.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_time_grid() {
        let empty = OccupancyConfig {
            steps: 0,
            ..Default::default()
        };
        assert_eq!(empty.dt(), 0.0);
        assert!(empty.time_grid().is_empty());

        let single = OccupancyConfig {
            steps: 1,
            ..Default::default()
        };
        assert_eq!(single.dt(), 0.0);
        assert_eq!(single.time_grid(), vec![0.0]);

        let pair = OccupancyConfig {
            steps: 2,
            t_max: 5.0,
            ..Default::default()
        };
        assert_eq!(pair.time_grid(), vec![0.0, 5.0]);
    }

    #[test]
    fn test_validation() {
        assert!(OccupancyConfig::default().validate().is_ok());

        let config = OccupancyConfig {
            mu: -1.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(OccupancyError::InvalidRate {
                name: "mu",
                value: -1.0
            })
        );

        let config = OccupancyConfig {
            beta: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = OccupancyConfig {
            steps: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(OccupancyError::InvalidTimeGrid(_))
        ));

        let config = OccupancyConfig {
            t_max: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_trajectory_shape_and_bounds() {
        let trajectory = run_occupancy(&small_config()).unwrap();

        assert_eq!(trajectory.len(), 50);
        assert_eq!(trajectory.mean_occupancy.len(), 50);
        assert!(trajectory
            .mean_occupancy
            .iter()
            .all(|m| (0.0..=1.0).contains(m)));
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = run_occupancy(&small_config()).unwrap();
        let b = run_occupancy(&small_config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_transfer_no_loss_is_constant() {
        let config = OccupancyConfig {
            beta: 0.0,
            mu: 0.0,
            phi: 0.0,
            ..small_config()
        };
        let trajectory = run_occupancy(&config).unwrap();
        let first = trajectory.mean_occupancy[0];
        assert!(trajectory.mean_occupancy.iter().all(|&m| m == first));
    }

    #[test]
    fn test_pure_loss_never_increases() {
        let config = OccupancyConfig {
            beta: 0.0,
            mu: 0.5,
            ..small_config()
        };
        let trajectory = run_occupancy(&config).unwrap();
        assert!(trajectory.mean_occupancy.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_zero_lineages() {
        let config = OccupancyConfig {
            lineages: 0,
            ..small_config()
        };
        let trajectory = run_occupancy(&config).unwrap();
        assert!(trajectory.mean_occupancy.iter().all(|&m| m == 0.0));
    }
}
