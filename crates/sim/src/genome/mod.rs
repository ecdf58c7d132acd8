//! Lineages and the shared gene pool.

pub mod gene_pool;
pub mod lineage;

pub use gene_pool::{GenePool, GENE_POOL_CAP};
pub use lineage::{Lineage, BASELINE_TRAITS, CRYPTIC_SPACE_FACTOR};
