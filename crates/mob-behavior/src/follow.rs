//! Path following shared by `Searching` and `Hunting`.
//!
//! A follower owns a cached [`Path`], the index of the node it is heading
//! for, and the path's age in frames.  Age is what throttles pathfinding:
//! a path is only recomputed once it is older than `max_path_age`.

use mob_agent::Mob;
use mob_core::Vec2;
use mob_grid::Path;
use tracing::debug;

use crate::{World, move_mob};

/// Outcome of one [`PathFollower::advance`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// No path cached; the mob held position.
    Idle,
    /// The mob moved toward a path node.
    Moving,
    /// The mob was within arrival distance of the final node.
    Arrived,
}

#[derive(Clone, Debug, Default)]
pub struct PathFollower {
    path:  Path,
    index: usize,
    /// Frames since the path was last replaced; `None` until the first one.
    age:   Option<u32>,
}

impl PathFollower {
    /// A follower with no path.  It is stale from the start.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index of the node currently aimed for.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    /// Count one more frame against the cached path.
    pub fn tick(&mut self) {
        if let Some(age) = &mut self.age {
            *age = age.saturating_add(1);
        }
    }

    pub fn is_stale(&self, max_age: u32) -> bool {
        self.age.is_none_or(|age| age > max_age)
    }

    /// Adopt `path` if it is non-empty.  An empty path leaves the cached one
    /// (and its age) in place, so the mob keeps walking the old route.
    pub fn replace(&mut self, path: Path) -> bool {
        if path.is_empty() {
            return false;
        }
        self.path = path;
        self.index = 0;
        self.age = Some(0);
        true
    }

    /// Drop the cached path so the next examination searches again.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Search for a path from the mob to `goal` and adopt it if one exists.
    pub fn recompute(&mut self, mob: &dyn Mob, world: &World<'_>, goal: Vec2) -> bool {
        let from = mob.pos();
        let found = self.replace(world.find_path(from, goal));
        if found {
            debug!(%from, %goal, nodes = self.path.len(), "path recomputed");
        } else {
            debug!(%from, %goal, kept = self.path.len(), "no path; keeping cached route");
        }
        found
    }

    /// Walk one frame along the cached path.
    ///
    /// Nodes closer than `arrive_distance` are skipped, except the last,
    /// which is never rolled past.  The mob then moves `speed` toward the
    /// first node that is still far enough away.
    pub fn advance(&mut self, mob: &mut dyn Mob, world: &World<'_>) -> Step {
        let cells = self.path.cells();
        let Some(last) = cells.len().checked_sub(1) else {
            return Step::Idle;
        };
        let arrive = world.config.arrive_distance;
        let here = mob.pos();

        while self.index < last && world.cell_point(cells[self.index]).distance(here) < arrive {
            self.index += 1;
        }

        let gap = world.cell_point(cells[self.index]) - here;
        // Standing exactly on the node: no direction to move in.
        if let Some(dir) = gap.normalize() {
            let speed = mob.speed();
            move_mob(mob, dir * speed, world);
        }

        if self.index == last && gap.len() < arrive {
            Step::Arrived
        } else {
            Step::Moving
        }
    }
}
