//! Recovery history for every extinction window.
//!
//! The engine keeps only the most recent recovery time. These functions
//! rebuild the full history from a diversity series, applying the same rule:
//! a window opens at each pulse generation, its baseline is the diversity
//! just before the pulse, and the first generation in the window reaching
//! 90% of the baseline records its offset from the pulse.

use brt_sim::simulation::RECOVERY_THRESHOLD;
use serde::Serialize;

/// Recovery outcome of one extinction window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowRecovery {
    /// Generation the pulse struck
    pub pulse_generation: usize,
    /// Diversity at the end of the generation before the pulse
    pub baseline: usize,
    /// Generations from pulse to first crossing, if the window recovered
    pub recovery_time: Option<usize>,
}

/// Per-window recovery times for a series with pulses every `period`
/// generations.
///
/// Returns an empty history for a zero `period`.
pub fn window_recovery_times(diversity_ts: &[usize], period: usize) -> Vec<WindowRecovery> {
    if period == 0 {
        return Vec::new();
    }

    (period..diversity_ts.len())
        .step_by(period)
        .map(|pulse_generation| {
            let baseline = diversity_ts[pulse_generation - 1];
            let threshold = (RECOVERY_THRESHOLD * baseline as f64).floor() as usize;
            let end = (pulse_generation + period).min(diversity_ts.len());
            let recovery_time = diversity_ts[pulse_generation..end]
                .iter()
                .position(|&d| d >= threshold);
            WindowRecovery {
                pulse_generation,
                baseline,
                recovery_time,
            }
        })
        .collect()
}
