//! Stroke response stopwatch

use std::fmt;

/// Elapsed-seconds counter for stroke response
///
/// The counter is caller-driven: whoever owns the clock calls [`tick`]
/// once a second while the timer is active.
///
/// [`tick`]: StrokeTimer::tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrokeTimer {
    active: bool,
    seconds: u64,
}

impl StrokeTimer {
    /// Creates a stopped timer at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting from zero. Starting an already running timer does
    /// nothing.
    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.seconds = 0;
        }
    }

    /// Stops the timer and zeroes the counter.
    pub fn stop(&mut self) {
        self.active = false;
        self.seconds = 0;
    }

    /// Zeroes the counter without changing whether the timer runs.
    pub fn reset(&mut self) {
        self.seconds = 0;
    }

    /// Advances the counter one second. Ignored while stopped.
    pub fn tick(&mut self) {
        if self.active {
            self.seconds += 1;
        }
    }

    /// Whether the timer is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds counted since the timer started.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.seconds
    }

    /// Elapsed time as zero-padded `MM:SS`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_elapsed(self.seconds)
    }
}

impl fmt::Display for StrokeTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Formats a second count as zero-padded `MM:SS`. Minutes are not capped,
/// so an hour-long count renders as `60:00`.
#[must_use]
pub fn format_elapsed(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
