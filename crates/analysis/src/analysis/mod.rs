//! Analysis tools for brt simulation output
//!
//! This module provides:
//! - NaN-aware order statistics over replicate values
//! - Per-scenario summaries with 95% percentile intervals
//! - Recovery history for every extinction window

pub mod recovery;
pub mod summary;
pub mod utils;

// Re-export commonly used functions
pub use recovery::{window_recovery_times, WindowRecovery};
pub use summary::{summarize, with_relative_index, ScenarioSummary};
pub use utils::{nan_median, nan_percentile};
