//! Per-mob tunables.

use std::time::Duration;

use mob_core::Vec2;

/// The stats that distinguish one kind of mob from another.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mobile {
    /// The player is only noticed within this world distance.
    pub detection_radius: f32,
    /// Pursuit ends after this long without seeing the player.
    pub bored_threshold: Duration,
    /// World units per frame.
    pub speed: f32,
    /// Patrol waypoints, visited cyclically.
    pub search_pattern: Vec<Vec2>,
}

impl Mobile {
    pub fn new(detection_radius: f32, bored_threshold: Duration, speed: f32) -> Self {
        Self {
            detection_radius,
            bored_threshold,
            speed,
            search_pattern: Vec::new(),
        }
    }

    pub fn with_search_pattern(mut self, pattern: Vec<Vec2>) -> Self {
        self.search_pattern = pattern;
        self
    }
}
