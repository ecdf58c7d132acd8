//! Post-extinction recovery tracking.
//!
//! Each extinction pulse opens a recovery window that lasts until the next
//! period boundary. Within a window, the first generation whose diversity
//! reaches [`RECOVERY_THRESHOLD`] of the pre-pulse diversity records the
//! recovery time as the generation's offset from the pulse. Later crossings
//! in the same window are ignored.
//!
//! ```text
//!   Idle --open--> Watching --crossed--> Crossed
//!     ^               |                     |
//!     +----close------+---------close-------+
//! ```
//!
//! Only the most recent crossing is retained; callers that need the history
//! of every window must reconstruct it from the diversity series.

use tracing::debug;

/// Fraction of the pre-extinction diversity that counts as recovered.
pub const RECOVERY_THRESHOLD: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryState {
    /// No window is open.
    Idle,
    /// A window is open and diversity has not reached the threshold.
    Watching,
    /// A window is open and the threshold has been reached.
    Crossed,
}

#[derive(Debug, Clone)]
pub struct RecoveryTracker {
    period: usize,
    state: RecoveryState,
    baseline: usize,
    recovery_time: Option<usize>,
}

impl RecoveryTracker {
    /// Create an idle tracker for pulses every `period` generations.
    ///
    /// `baseline` is the diversity recovery is measured against until the
    /// first window opens.
    pub fn new(period: usize, baseline: usize) -> Self {
        Self {
            period: period.max(1),
            state: RecoveryState::Idle,
            baseline,
            recovery_time: None,
        }
    }

    pub fn state(&self) -> RecoveryState {
        self.state
    }

    pub fn baseline(&self) -> usize {
        self.baseline
    }

    /// Diversity that must be reached to count as recovered.
    pub fn threshold(&self) -> usize {
        (RECOVERY_THRESHOLD * self.baseline as f64).floor() as usize
    }

    /// Open a window at a pulse, against the diversity just before it.
    pub fn open(&mut self, baseline: usize) {
        self.baseline = baseline;
        self.state = RecoveryState::Watching;
    }

    /// Feed the diversity measured at the end of `generation`.
    ///
    /// Returns the recovery time if this generation is the first crossing of
    /// the open window.
    pub fn observe(&mut self, generation: usize, diversity: usize) -> Option<usize> {
        if self.state != RecoveryState::Watching || diversity < self.threshold() {
            return None;
        }
        let elapsed = generation % self.period;
        debug!(
            generation,
            diversity,
            baseline = self.baseline,
            elapsed,
            "Diversity recovered"
        );
        self.recovery_time = Some(elapsed);
        self.state = RecoveryState::Crossed;
        Some(elapsed)
    }

    /// Close the window if `generation` is the last of a period.
    ///
    /// The diversity at closing becomes the baseline for the next window.
    /// Returns `true` if a period boundary was reached.
    pub fn close_if_due(&mut self, generation: usize, diversity: usize) -> bool {
        if generation == 0 || (generation + 1) % self.period != 0 {
            return false;
        }
        self.state = RecoveryState::Idle;
        self.baseline = diversity;
        true
    }

    /// Recovery time of the most recent window that crossed.
    pub fn recovery_time(&self) -> Option<usize> {
        self.recovery_time
    }

    /// Recovery time in generations, NaN if no window ever crossed.
    pub fn recovery_time_gens(&self) -> f64 {
        self.recovery_time.map_or(f64::NAN, |t| t as f64)
    }
}
