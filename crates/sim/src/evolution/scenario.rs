//! Experimental scenarios.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which mutation operators are active during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Mutation-only baseline: no operator fires.
    #[default]
    Classical,
    CrypticOnly,
    HgtOnly,
    /// Cryptic activation and lateral transfer together.
    BrtFull,
}

/// The operators enabled by a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSet {
    pub cryptic: bool,
    pub hgt: bool,
}

impl Scenario {
    /// All scenarios, in reporting order.
    pub const ALL: [Scenario; 4] = [
        Scenario::Classical,
        Scenario::CrypticOnly,
        Scenario::HgtOnly,
        Scenario::BrtFull,
    ];

    /// Static operator table.
    pub const fn operators(self) -> OperatorSet {
        match self {
            Scenario::Classical => OperatorSet {
                cryptic: false,
                hgt: false,
            },
            Scenario::CrypticOnly => OperatorSet {
                cryptic: true,
                hgt: false,
            },
            Scenario::HgtOnly => OperatorSet {
                cryptic: false,
                hgt: true,
            },
            Scenario::BrtFull => OperatorSet {
                cryptic: true,
                hgt: true,
            },
        }
    }

    /// Identifier used in file names and configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Scenario::Classical => "classical",
            Scenario::CrypticOnly => "cryptic_only",
            Scenario::HgtOnly => "hgt_only",
            Scenario::BrtFull => "brt_full",
        }
    }

    /// Short label for figures.
    pub const fn label(self) -> &'static str {
        match self {
            Scenario::Classical => "Classical",
            Scenario::CrypticOnly => "Cryptic only",
            Scenario::HgtOnly => "HGT only",
            Scenario::BrtFull => "BRT",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownScenario(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table() {
        assert_eq!(
            Scenario::Classical.operators(),
            OperatorSet {
                cryptic: false,
                hgt: false
            }
        );
        assert!(Scenario::CrypticOnly.operators().cryptic);
        assert!(!Scenario::CrypticOnly.operators().hgt);
        assert!(!Scenario::HgtOnly.operators().cryptic);
        assert!(Scenario::HgtOnly.operators().hgt);
        assert!(Scenario::BrtFull.operators().cryptic);
        assert!(Scenario::BrtFull.operators().hgt);
    }

    #[test]
    fn test_parse_round_trip_names() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.as_str().parse::<Scenario>().unwrap(), scenario);
            assert_eq!(scenario.to_string(), scenario.as_str());
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "brt".parse::<Scenario>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownScenario("brt".into()));
    }

    #[test]
    fn test_serde_names_match_identifiers() {
        for scenario in Scenario::ALL {
            let json = serde_json::to_string(&scenario).unwrap();
            assert_eq!(json, format!("\"{}\"", scenario.as_str()));
        }
    }
}
