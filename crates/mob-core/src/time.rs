//! Frame-synchronous time model.
//!
//! The level advances one [`Frame`] per rendered frame and is handed the
//! wall-clock `Duration` since the previous one.  Path staleness is counted
//! in frames; boredom is measured in accumulated elapsed time.

use std::fmt;
use std::time::Duration;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// Monotonic frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and total simulated time since level load.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    pub current_frame: Frame,
    pub elapsed: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame, which lasted `dt`.
    #[inline]
    pub fn advance(&mut self, dt: Duration) {
        self.current_frame = self.current_frame.next();
        self.elapsed += dt;
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_frame, self.elapsed.as_secs_f64())
    }
}
