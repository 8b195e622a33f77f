//! Patrol: walk the search pattern until the player shows up.

use mob_agent::{FrameSet, Mob};
use mob_core::Vec2;
use mob_grid::Path;
use tracing::debug;

use crate::{Hunting, MobState, PathFollower, StateKind, Step, Transition, World};

/// Cycles through waypoints, re-pathing toward the current one whenever the
/// cached path goes stale.  An empty pattern means standing guard.
#[derive(Clone, Debug)]
pub struct Searching {
    pattern:  Vec<Vec2>,
    target:   usize,
    follower: PathFollower,
}

impl Searching {
    pub fn new(pattern: Vec<Vec2>) -> Self {
        Self { pattern, target: 0, follower: PathFollower::new() }
    }

    pub fn pattern(&self) -> &[Vec2] {
        &self.pattern
    }

    /// Index into the pattern of the waypoint being walked to.
    pub fn waypoint_index(&self) -> usize {
        self.target
    }

    pub fn follower(&self) -> &PathFollower {
        &self.follower
    }
}

impl MobState for Searching {
    fn kind(&self) -> StateKind {
        StateKind::Searching
    }

    fn examine_world(&mut self, mob: &mut dyn Mob, world: &World<'_>) -> Transition {
        self.follower.tick();

        if world.player_seen(mob) {
            return Transition::Push(Hunting::new().into());
        }
        let Some(&goal) = self.pattern.get(self.target) else {
            return Transition::Stay;
        };

        if self.follower.is_stale(world.config.max_path_age) {
            self.follower.recompute(mob, world, goal);
        }

        if self.follower.advance(mob, world) == Step::Arrived {
            self.target = (self.target + 1) % self.pattern.len();
            // The cached path ends at the old waypoint.
            self.follower.clear();
            debug!(waypoint = self.target, "waypoint reached; heading for the next");
        }
        Transition::Stay
    }

    fn enter(&mut self, mob: &mut dyn Mob) {
        mob.set_frames(FrameSet::Search);
    }

    fn path(&self) -> Option<&Path> {
        Some(self.follower.path())
    }
}
