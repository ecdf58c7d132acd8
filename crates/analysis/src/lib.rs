//! Replicate analysis for brt simulations.
//!
//! Summaries across seeds (NaN-aware medians and percentile intervals), the
//! relative innovation index and per-window recovery history.

pub mod analysis;

pub use analysis::{
    nan_median, nan_percentile, summarize, window_recovery_times, with_relative_index,
    ScenarioSummary, WindowRecovery,
};
