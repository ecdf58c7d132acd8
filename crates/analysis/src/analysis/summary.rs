//! Per-scenario summaries across replicates.

use crate::analysis::utils::{nan_median, nan_percentile};
use brt_sim::evolution::Scenario;
use brt_sim::SimulationResult;
use serde::Serialize;

/// Replicate summary for one scenario.
///
/// Every statistic ignores replicates whose value is NaN and is NaN itself
/// when no replicate contributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub scenario: Scenario,
    pub recovery_time_median_gens: f64,
    /// 2.5th percentile of recovery times
    pub ci95_low: f64,
    /// 97.5th percentile of recovery times
    pub ci95_high: f64,
    pub innovation_total_median: f64,
    /// Innovation median over the classical scenario's median
    pub novel_traits_index_relative: f64,
}

/// Summarize the replicates of one scenario.
///
/// The relative index is left NaN; fill it across scenarios with
/// [`with_relative_index`].
pub fn summarize(scenario: Scenario, results: &[SimulationResult]) -> ScenarioSummary {
    let recovery: Vec<f64> = results.iter().map(|r| r.recovery_time_gens).collect();
    let innovation: Vec<f64> = results.iter().map(|r| r.innovation_total as f64).collect();

    ScenarioSummary {
        scenario,
        recovery_time_median_gens: nan_median(&recovery),
        ci95_low: nan_percentile(&recovery, 2.5),
        ci95_high: nan_percentile(&recovery, 97.5),
        innovation_total_median: nan_median(&innovation),
        novel_traits_index_relative: f64::NAN,
    }
}

/// Set each summary's innovation index relative to the classical scenario.
///
/// The index is NaN for every summary when the classical summary is absent
/// or its innovation median is not positive.
pub fn with_relative_index(summaries: &mut [ScenarioSummary]) {
    let baseline = summaries
        .iter()
        .find(|s| s.scenario == Scenario::Classical)
        .map(|s| s.innovation_total_median)
        .filter(|&b| b > 0.0);

    for summary in summaries.iter_mut() {
        summary.novel_traits_index_relative = match baseline {
            Some(b) => summary.innovation_total_median / b,
            None => f64::NAN,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(recovery: f64, innovation: usize) -> SimulationResult {
        SimulationResult {
            diversity_ts: vec![10, 5, 9],
            innovation_total: innovation,
            recovery_time_gens: recovery,
        }
    }

    #[test]
    fn test_summarize() {
        let results = [result(4.0, 10), result(f64::NAN, 20), result(8.0, 30)];
        let summary = summarize(Scenario::BrtFull, &results);

        assert_eq!(summary.scenario, Scenario::BrtFull);
        assert_eq!(summary.recovery_time_median_gens, 6.0);
        assert!((summary.ci95_low - 4.1).abs() < 1e-12);
        assert!((summary.ci95_high - 7.9).abs() < 1e-12);
        assert_eq!(summary.innovation_total_median, 20.0);
        assert!(summary.novel_traits_index_relative.is_nan());
    }

    #[test]
    fn test_summarize_no_recovery() {
        let results = [result(f64::NAN, 0), result(f64::NAN, 0)];
        let summary = summarize(Scenario::Classical, &results);

        assert!(summary.recovery_time_median_gens.is_nan());
        assert!(summary.ci95_low.is_nan());
        assert!(summary.ci95_high.is_nan());
        assert_eq!(summary.innovation_total_median, 0.0);
    }

    #[test]
    fn test_relative_index_with_positive_baseline() {
        let mut summaries = vec![
            summarize(Scenario::Classical, &[result(1.0, 4)]),
            summarize(Scenario::BrtFull, &[result(1.0, 10)]),
        ];
        with_relative_index(&mut summaries);

        assert_eq!(summaries[0].novel_traits_index_relative, 1.0);
        assert_eq!(summaries[1].novel_traits_index_relative, 2.5);
    }

    #[test]
    fn test_relative_index_zero_baseline() {
        let mut summaries = vec![
            summarize(Scenario::Classical, &[result(1.0, 0)]),
            summarize(Scenario::HgtOnly, &[result(1.0, 7)]),
        ];
        with_relative_index(&mut summaries);

        assert!(summaries
            .iter()
            .all(|s| s.novel_traits_index_relative.is_nan()));
    }

    #[test]
    fn test_relative_index_without_classical() {
        let mut summaries = vec![summarize(Scenario::CrypticOnly, &[result(1.0, 3)])];
        with_relative_index(&mut summaries);
        assert!(summaries[0].novel_traits_index_relative.is_nan());
    }
}
