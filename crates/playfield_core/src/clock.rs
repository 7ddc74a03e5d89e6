//! Caller-owned clock state for fixed-rate simulation stepping.
//!
//! The clock only tracks a monotonic start instant and the last elapsed
//! reading; the gating decision (did enough wall-clock time pass for a
//! step?) belongs to the engine's `tick`. Because the state is an explicit
//! value owned by the caller, several independent fixed-rate loops can run
//! side by side, each with its own clock.

use std::time::Instant;

/// Monotonic elapsed-time tracker for one fixed-rate loop.
///
/// ```ignore
/// let mut clock = FixedRateClock::new();
/// loop {
///     engine.tick(&mut clock, 60.0, |engine, elapsed| {
///         // move characters here
///     });
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    started: Instant,
    last_elapsed: f32,
}

impl FixedRateClock {
    /// Starts a clock at the current instant.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            last_elapsed: 0.0,
        }
    }

    /// Seconds since the clock (re)started. Also remembered as the last
    /// reading.
    pub fn elapsed_secs(&mut self) -> f32 {
        let elapsed = self.started.elapsed().as_secs_f32();
        self.last_elapsed = elapsed;
        elapsed
    }

    /// Restarts the measurement window. Called after a step fires.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// The elapsed reading computed by the most recent [`elapsed_secs`]
    /// call.
    ///
    /// [`elapsed_secs`]: FixedRateClock::elapsed_secs
    pub fn last_elapsed(&self) -> f32 {
        self.last_elapsed
    }
}

impl Default for FixedRateClock {
    fn default() -> Self {
        Self::new()
    }
}
