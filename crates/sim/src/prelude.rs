//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use brt_sim::prelude::*;
//!
//! let config = SimulationConfig {
//!     n_lineages: 40,
//!     generations: 20,
//!     extinction_period: 10,
//!     scenario: Scenario::BrtFull,
//!     ..Default::default()
//! };
//! let result = run_simulation(&config).unwrap();
//! assert_eq!(result.diversity_ts.len(), 20);
//! ```

pub use crate::base::{RandomStreams, TraitId, TraitSet};
pub use crate::errors::{ConfigError, OccupancyError};
pub use crate::evolution::{LifeStage, Scenario};
pub use crate::genome::{GenePool, Lineage};
pub use crate::simulation::{
    run_occupancy, run_simulation, ExtinctionPolicy, OccupancyConfig, Population, Simulation,
    SimulationBuilder, SimulationConfig, SimulationResult,
};
