/// FrameClock: measures the delta between host redraws.

use std::time::Instant;

/// Longest delta reported; longer gaps (suspended window, debugger) clamp.
pub const DEFAULT_MAX_DELTA: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None, max_delta: DEFAULT_MAX_DELTA }
    }

    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta.max(0.0);
        self
    }

    /// Seconds since the previous call (0 on the first call).
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .last
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        delta.min(self.max_delta)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
