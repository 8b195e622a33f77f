//! A concrete, animated mob.

use std::time::Duration;

use mob_core::Vec2;

use crate::{FrameSet, Mob, Mobile};

/// Frame step for mob animations (5 Hz).
const MOB_FRAME_STEP: Duration = Duration::from_millis(200);

/// Default melee reach in world units.
const DEFAULT_SWING_RANGE: f32 = 1.0;

// ── Animation ─────────────────────────────────────────────────────────────────

/// Cycles through the frames of a [`FrameSet`] at a fixed step.
#[derive(Clone, Debug)]
pub struct Animation {
    set:         FrameSet,
    step:        Duration,
    cursor:      usize,
    accumulated: Duration,
}

impl Animation {
    pub fn new(set: FrameSet, step: Duration) -> Self {
        Self { set, step, cursor: 0, accumulated: Duration::ZERO }
    }

    pub fn set(&self) -> FrameSet {
        self.set
    }

    /// Switch frame set, restarting from its first frame.  Re-selecting the
    /// active set is a no-op so the animation does not stutter.
    pub fn switch(&mut self, set: FrameSet) {
        if set != self.set {
            self.set = set;
            self.cursor = 0;
            self.accumulated = Duration::ZERO;
        }
    }

    pub fn update(&mut self, elapsed: Duration) {
        if self.step.is_zero() {
            return;
        }
        let len = self.set.frames().len();
        self.accumulated += elapsed;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            if self.set.loops() {
                self.cursor = (self.cursor + 1) % len;
            } else {
                self.cursor = (self.cursor + 1).min(len - 1);
            }
        }
    }

    /// Current sprite-sheet frame index.
    pub fn frame(&self) -> usize {
        self.set.frames()[self.cursor]
    }
}

// ── MobEntity ─────────────────────────────────────────────────────────────────

/// A spawned mob: a box in the world, its [`Mobile`] stats, and animation
/// state.
#[derive(Clone, Debug)]
pub struct MobEntity {
    pos:          Vec2,
    half_extents: Vec2,
    mobile:       Mobile,
    swing_range:  f32,
    animation:    Animation,
    dead:         bool,
}

impl MobEntity {
    /// A live, idle mob anchored at `pos`.
    pub fn new(pos: Vec2, half_extents: Vec2, mobile: Mobile) -> Self {
        Self {
            pos,
            half_extents,
            mobile,
            swing_range: DEFAULT_SWING_RANGE,
            animation: Animation::new(FrameSet::Idle, MOB_FRAME_STEP),
            dead: false,
        }
    }

    pub fn with_swing_range(mut self, range: f32) -> Self {
        self.swing_range = range;
        self
    }

    pub fn mobile(&self) -> &Mobile {
        &self.mobile
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Play the death animation and mark the mob dead.  Idempotent.
    pub fn die(&mut self) {
        if !self.dead {
            self.dead = true;
            self.animation.switch(FrameSet::Dying);
        }
    }

    /// Advance animation by one frame's worth of time.
    pub fn update(&mut self, elapsed: Duration) {
        self.animation.update(elapsed);
    }
}

impl Mob for MobEntity {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    fn speed(&self) -> f32 {
        self.mobile.speed
    }

    fn detection_radius(&self) -> f32 {
        self.mobile.detection_radius
    }

    fn bored_threshold(&self) -> Duration {
        self.mobile.bored_threshold
    }

    fn search_pattern(&self) -> &[Vec2] {
        &self.mobile.search_pattern
    }

    fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn set_frames(&mut self, frames: FrameSet) {
        // A dying mob keeps its death animation whatever the AI asks for.
        if !self.dead {
            self.animation.switch(frames);
        }
    }

    fn should_swing(&self, target: Vec2) -> bool {
        self.pos.distance(target) < self.swing_range
    }
}
