// crates/themekit-core/src/timer.rs
// ============================================================================
// Module: Timer
// Description: Wall-clock span measurement for theme bootstrap profiling.
// Purpose: Measure elapsed time between explicit start and stop marks.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`Timer`] starts running on construction. `stop` freezes the measured
//! span; `elapsed_secs` reports either the frozen span or the running span
//! when the timer was never stopped, rounded to microsecond precision.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;
use std::time::Instant;

// ============================================================================
// SECTION: Timer
// ============================================================================

/// Wall-clock timer with explicit start/stop marks.
///
/// # Invariants
/// - `start` clears any previous stop mark.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Instant of the most recent start.
    started: Instant,
    /// Frozen span, set by `stop`.
    stopped: Option<Duration>,
}

impl Timer {
    /// Creates a timer and starts it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    /// Restarts the timer, clearing any stop mark.
    pub fn start(&mut self) {
        self.started = Instant::now();
        self.stopped = None;
    }

    /// Stops the timer, freezing the measured span.
    pub fn stop(&mut self) {
        self.stopped = Some(self.started.elapsed());
    }

    /// Returns the measured span in seconds, rounded to microseconds.
    ///
    /// When the timer was not stopped, the span from the last start to now is
    /// reported without freezing it.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        let span = self.stopped.unwrap_or_else(|| self.started.elapsed());
        (span.as_secs_f64() * 1_000_000.0).round() / 1_000_000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use std::thread;

    use super::*;

    #[test]
    fn stopped_timer_freezes_the_span() {
        let mut timer = Timer::new();
        thread::sleep(Duration::from_millis(5));
        timer.stop();
        let first = timer.elapsed_secs();
        thread::sleep(Duration::from_millis(5));
        let second = timer.elapsed_secs();
        assert!((first - second).abs() < f64::EPSILON, "stop mark should freeze the span");
        assert!(first > 0.0);
    }

    #[test]
    fn running_timer_keeps_growing() {
        let timer = Timer::new();
        let first = timer.elapsed_secs();
        thread::sleep(Duration::from_millis(5));
        let second = timer.elapsed_secs();
        assert!(second >= first);
    }

    #[test]
    fn restart_clears_previous_stop() {
        let mut timer = Timer::new();
        timer.stop();
        timer.start();
        thread::sleep(Duration::from_millis(2));
        assert!(timer.elapsed_secs() > 0.0);
    }
}
