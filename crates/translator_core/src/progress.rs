use std::time::Duration;

pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(500);
/// The simulated bar never passes this on its own; completion comes from the response.
pub const PROGRESS_CAP: f32 = 90.0;
/// Upper bound (exclusive) of a single random tick.
pub const MAX_TICK_INCREMENT: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulatedProgress {
    percent: f32,
}

impl SimulatedProgress {
    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Adds `increment` (clamped to `[0, 15)`); returns true once the cap is reached.
    pub fn advance(&mut self, increment: f32) -> bool {
        let step = if increment.is_finite() {
            increment.clamp(0.0, MAX_TICK_INCREMENT)
        } else {
            0.0
        };
        self.percent = (self.percent + step).min(PROGRESS_CAP);
        self.percent >= PROGRESS_CAP
    }

    pub fn is_capped(&self) -> bool {
        self.percent >= PROGRESS_CAP
    }
}
