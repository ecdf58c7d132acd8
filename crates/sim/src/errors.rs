use thiserror::Error;

/// Errors raised while validating a simulation configuration.
///
/// Only out-of-range values are rejected. Degenerate but in-range input
/// (an empty population, zero generations, a compatibility threshold of 0)
/// is accepted and simulated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A probability outside `[0, 1]` or a non-finite value.
    #[error("Invalid probability for {name}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("Extinction period must be at least 1 generation")]
    ZeroExtinctionPeriod,

    #[error("Trait space {trait_space} is too small to draw {required} distinct baseline traits")]
    TraitSpaceTooSmall { trait_space: u64, required: usize },

    #[error("Cryptic size {cryptic_size} exceeds the cryptic trait space of {space}")]
    CrypticSizeTooLarge { cryptic_size: usize, space: u64 },

    #[error("Unknown scenario '{0}' (expected one of: classical, cryptic_only, hgt_only, brt_full)")]
    UnknownScenario(String),

    #[error("Unknown extinction policy '{0}' (expected: bernoulli, truncation)")]
    UnknownExtinctionPolicy(String),

    #[error("Invalid configuration JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

/// Errors raised by the module-occupancy model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OccupancyError {
    #[error("Invalid rate for {name}: {value} (must be finite and non-negative)")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("Invalid time grid: {0}")]
    InvalidTimeGrid(String),
}

/// Check that `value` is a finite probability.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_probability_bounds() {
        assert!(check_probability("p", 0.0).is_ok());
        assert!(check_probability("p", 1.0).is_ok());
        assert!(check_probability("p", 0.5).is_ok());
        assert_eq!(
            check_probability("p", 1.5),
            Err(ConfigError::InvalidProbability { name: "p", value: 1.5 })
        );
        assert!(check_probability("p", -0.1).is_err());
        assert!(check_probability("p", f64::NAN).is_err());
        assert!(check_probability("p", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidProbability {
            name: "hgt_rate",
            value: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid probability for hgt_rate: 2 (must be between 0.0 and 1.0)"
        );
        assert!(ConfigError::UnknownScenario("x".into())
            .to_string()
            .contains("brt_full"));
    }
}
