//! The `Mob` trait: what the behavior state machine needs from an entity.

use std::time::Duration;

use mob_core::{Rect, Vec2};

/// Named animation frame sets.  States pick one on entry; the entity maps it
/// to sprite-sheet frame indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameSet {
    Idle,
    Search,
    Hunt,
    Dying,
}

impl FrameSet {
    /// Sprite-sheet frame indices for this set.
    pub fn frames(self) -> &'static [usize] {
        match self {
            FrameSet::Idle   => &[0],
            FrameSet::Search => &[0, 1],
            FrameSet::Hunt   => &[2, 3],
            FrameSet::Dying  => &[0, 1, 2, 3, 4, 5, 5],
        }
    }

    /// `false` for one-shot sets that hold their last frame.
    pub fn loops(self) -> bool {
        !matches!(self, FrameSet::Dying)
    }
}

/// Capability surface of an AI-driven entity.
///
/// Positions are the bottom-left anchor of the entity's box; see
/// [`bounds`](Self::bounds).
///
/// Only [`detect`](Self::detect), [`bored`](Self::bored), and
/// [`bounds`](Self::bounds) have defaults, expressed in terms of the required
/// accessors.
pub trait Mob {
    fn pos(&self) -> Vec2;

    /// Half the width and height of the entity's box.
    fn half_extents(&self) -> Vec2;

    /// Axis-aligned box derived from position and half extents.
    fn bounds(&self) -> Rect {
        Rect::from_anchor(self.pos(), self.half_extents())
    }

    /// World units moved per frame at full stride.
    fn speed(&self) -> f32;

    fn detection_radius(&self) -> f32;

    fn bored_threshold(&self) -> Duration;

    /// Cyclic patrol waypoints in world space.  May be empty.
    fn search_pattern(&self) -> &[Vec2];

    /// `true` if something `dist` away is close enough to notice.
    fn detect(&self, dist: f32) -> bool {
        dist <= self.detection_radius()
    }

    /// `true` once `since_contact` reaches the boredom threshold.
    fn bored(&self, since_contact: Duration) -> bool {
        since_contact >= self.bored_threshold()
    }

    /// Commit a new position.  Called only through the move primitive.
    fn move_to(&mut self, pos: Vec2);

    /// Cosmetic: switch animation when the active state changes.
    fn set_frames(&mut self, frames: FrameSet);

    /// Melee-range predicate against a target position.
    fn should_swing(&self, target: Vec2) -> bool;
}
