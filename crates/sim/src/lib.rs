//! # Simulation Crate
//!
//! The `brt-sim` crate provides the core logic for simulating lineage
//! diversity through recurring mass extinctions. It includes modules for
//! defining lineages and the shared gene pool, the trait-set mutation
//! operators (cryptic activation and lateral transfer), and the generational
//! engine that ties extinction, recolonization, trait updates and recovery
//! tracking together.
//!
//! The single entry point for drivers is [`simulation::run_simulation`].

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod simulation;
pub mod prelude;

pub use simulation::{run_simulation, SimulationConfig, SimulationResult};
