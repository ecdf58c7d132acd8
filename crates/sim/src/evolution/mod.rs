//! Evolution module providing the trait-set mutation operators.
//!
//! This module implements the processes that add expressed traits to a
//! lineage:
//! - **Cryptic activation**: a latent trait is promoted into the expressed set
//! - **Lateral transfer**: traits are acquired from the shared gene pool,
//!   subject to a compatibility filter
//!
//! Which operators run is decided by the [`Scenario`].

pub mod activation;
pub mod operators;
pub mod scenario;
pub mod transfer;

pub use activation::CrypticActivation;
pub use operators::{MutationOutcome, TraitOperators};
pub use scenario::{OperatorSet, Scenario};
pub use transfer::LateralTransfer;

/// Whether a lineage is being created this generation or already existed.
///
/// Newborns get higher operator probabilities, applied once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStage {
    Newborn,
    Established,
}
