//! The record returned at the end of a run.

use serde::{Deserialize, Serialize};

/// Outcome of one simulation run.
///
/// `recovery_time_gens` is NaN when no recovery window ever crossed the
/// threshold. In JSON the NaN is written as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Living lineages at the end of each generation
    pub diversity_ts: Vec<usize>,
    /// Innovation measured in the final generation
    pub innovation_total: usize,
    /// Generations from pulse to recovery in the most recent window that recovered
    #[serde(with = "nan_as_null")]
    pub recovery_time_gens: f64,
}

impl SimulationResult {
    /// Result for a run with no generations.
    pub fn empty() -> Self {
        Self {
            diversity_ts: Vec::new(),
            innovation_total: 0,
            recovery_time_gens: f64::NAN,
        }
    }

    pub fn has_recovered(&self) -> bool {
        !self.recovery_time_gens.is_nan()
    }

    /// Diversity at the end of the run, if any generation ran.
    pub fn final_diversity(&self) -> Option<usize> {
        self.diversity_ts.last().copied()
    }
}

// NaN compares equal to NaN so that identical runs compare equal.
impl PartialEq for SimulationResult {
    fn eq(&self, other: &Self) -> bool {
        self.diversity_ts == other.diversity_ts
            && self.innovation_total == other.innovation_total
            && self.recovery_time_gens.to_bits() == other.recovery_time_gens.to_bits()
    }
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
