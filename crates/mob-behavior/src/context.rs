//! Read-only world state passed to every behavior callback.

use mob_agent::Mob;
use mob_core::{AiConfig, Cell, Vec2};
use mob_grid::{MoveResolver, OccupancyGrid, Path, PathOptions, Pathfinder, can_see, find_path};

/// What a mob may know about the world during one frame.
///
/// Built by the level once per frame and shared by every mob's
/// examination.  Mobs hold no reference back to the level; everything they
/// need arrives through this struct.
pub struct World<'a> {
    /// Collision layer, read-only during play.
    pub grid: &'a OccupancyGrid,

    /// The player's live position (bottom-left anchor).
    pub player: Vec2,

    pub pathfinder: &'a dyn Pathfinder,

    /// Clips requested moves against the grid.
    pub resolver: &'a dyn MoveResolver,

    pub config: &'a AiConfig,
}

impl<'a> World<'a> {
    #[inline]
    pub fn new(
        grid:       &'a OccupancyGrid,
        player:     Vec2,
        pathfinder: &'a dyn Pathfinder,
        resolver:   &'a dyn MoveResolver,
        config:     &'a AiConfig,
    ) -> Self {
        Self { grid, player, pathfinder, resolver, config }
    }

    /// `true` if the player is within `mob`'s detection radius and nothing
    /// blocks the line of sight between them.
    pub fn player_seen(&self, mob: &dyn Mob) -> bool {
        let h = self.config.half_extent;
        let here = mob.pos();
        mob.detect(here.distance(self.player)) && can_see(self.grid, here, self.player, h, h)
    }

    /// Grid path between two world points.  Empty when none exists.
    pub fn find_path(&self, from: Vec2, to: Vec2) -> Path {
        find_path(self.grid, self.pathfinder, from, to, &PathOptions::from(self.config))
    }

    /// World anchor a mob aims for when walking to `cell`.
    #[inline]
    pub fn cell_point(&self, cell: Cell) -> Vec2 {
        self.grid.world_at(cell, self.config.half_extent)
    }
}
