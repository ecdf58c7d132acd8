//! Simulation engine and population management.
//!
//! This module provides the generational loop, the fixed-capacity population
//! it operates on, recovery tracking and the result record.
//!
//! The most commonly used types are re-exported here:
//!
//! - `Simulation`: the engine that runs generations and orchestrates
//!   extinction, recolonization and trait updates.
//! - `SimulationBuilder`: fluent builder for constructing `Simulation`
//!   instances with defaults and validation.
//! - `run_simulation`: one-call entry point used by drivers.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod occupancy;
pub mod population;
pub mod recovery;
pub mod result;

pub use builder::SimulationBuilder;
pub use configs::{ExtinctionPolicy, SimulationConfig};
pub use engine::{run_simulation, GenerationReport, PulseReport, Simulation};
pub use occupancy::{run_occupancy, OccupancyConfig, OccupancyTrajectory};
pub use population::{birth_quota, Population};
pub use recovery::{RecoveryState, RecoveryTracker, RECOVERY_THRESHOLD};
pub use result::SimulationResult;
