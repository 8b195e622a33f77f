//! Pursuit: chase the player until the trail goes cold.

use std::time::Duration;

use mob_agent::{FrameSet, Mob};
use mob_grid::Path;
use tracing::trace;

use crate::{MobState, PathFollower, StateKind, Transition, World};

/// Chases the player's live position.  Each sighting resets the contact
/// timer; once the mob is bored without a sighting the state pops.
#[derive(Clone, Debug, Default)]
pub struct Hunting {
    since_contact: Duration,
    follower:      PathFollower,
}

impl Hunting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the player was last seen.
    pub fn since_contact(&self) -> Duration {
        self.since_contact
    }

    pub fn follower(&self) -> &PathFollower {
        &self.follower
    }
}

impl MobState for Hunting {
    fn kind(&self) -> StateKind {
        StateKind::Hunting
    }

    fn examine_world(&mut self, mob: &mut dyn Mob, world: &World<'_>) -> Transition {
        self.follower.tick();

        let seen = world.player_seen(mob);
        if seen {
            if self.follower.is_stale(world.config.max_path_age) {
                self.follower.recompute(mob, world, world.player);
            }
            self.since_contact = Duration::ZERO;
        }
        if !seen && mob.bored(self.since_contact) {
            return Transition::Pop;
        }

        if mob.should_swing(world.player) {
            // Attack hook: a swing sub-state would be pushed from here.
            trace!(player = %world.player, "player within swing range");
        }

        self.follower.advance(mob, world);
        Transition::Stay
    }

    fn update(&mut self, _mob: &mut dyn Mob, elapsed: Duration) {
        self.since_contact += elapsed;
    }

    fn enter(&mut self, mob: &mut dyn Mob) {
        mob.set_frames(FrameSet::Hunt);
    }

    fn path(&self) -> Option<&Path> {
        Some(self.follower.path())
    }
}
