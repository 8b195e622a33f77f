//! The `Level` struct and its frame loop.

use std::time::Duration;

use mob_agent::{MobEntity, SpawnRegistry};
use mob_behavior::{BehaviorStack, World};
use mob_core::{AiConfig, FrameClock, MobId, Vec2};
use mob_grid::{AStar, MoveResolver, OccupancyGrid, Path, Pathfinder, SlideResolver};
use tracing::debug;

use crate::{LevelError, LevelObserver, LevelResult};

// ── MobSlot ───────────────────────────────────────────────────────────────────

/// One spawned mob: its entity and the behavior stack driving it.
#[derive(Clone, Debug)]
pub struct MobSlot {
    pub id:       MobId,
    /// Spawn-registry kind it was created from.
    pub kind:     String,
    pub entity:   MobEntity,
    pub behavior: BehaviorStack,
}

// ── Level ─────────────────────────────────────────────────────────────────────

/// Owns the collision grid, the player position, and every mob.
///
/// The grid is only writable through [`grid_mut`](Self::grid_mut), which is
/// meant for load-time edits before the first [`update`](Self::update).
///
/// Create via [`LevelBuilder`][crate::LevelBuilder].
pub struct Level<P: Pathfinder = AStar, M: MoveResolver = SlideResolver> {
    pub config: AiConfig,

    pub clock: FrameClock,

    pub(crate) grid: OccupancyGrid,

    player: Vec2,

    mobs: Vec<MobSlot>,

    next_id: u32,

    registry: SpawnRegistry,

    half_extents: Vec2,

    pathfinder: P,

    resolver: M,
}

impl<P: Pathfinder, M: MoveResolver> Level<P, M> {
    pub(crate) fn new(
        grid:         OccupancyGrid,
        registry:     SpawnRegistry,
        config:       AiConfig,
        pathfinder:   P,
        resolver:     M,
        half_extents: Vec2,
    ) -> Self {
        Self {
            config,
            clock: FrameClock::new(),
            grid,
            player: Vec2::ZERO,
            mobs: Vec::new(),
            next_id: 0,
            registry,
            half_extents,
            pathfinder,
            resolver,
        }
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut OccupancyGrid {
        &mut self.grid
    }

    pub fn pathfinder(&self) -> &P {
        &self.pathfinder
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn set_player_position(&mut self, at: Vec2) {
        self.player = at;
    }

    pub fn mobs(&self) -> &[MobSlot] {
        &self.mobs
    }

    pub fn mob(&self, id: MobId) -> Option<&MobSlot> {
        self.mobs.iter().find(|slot| slot.id == id)
    }

    fn mob_mut(&mut self, id: MobId) -> LevelResult<&mut MobSlot> {
        self.mobs
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or(LevelError::UnknownMob(id))
    }

    /// Spawn a `kind` mob anchored at `at`.  It starts dormant and begins
    /// acting on the next [`update`](Self::update).
    pub fn spawn_mob(&mut self, kind: &str, at: Vec2) -> LevelResult<MobId> {
        let entity = self.registry.spawn(kind, at, self.half_extents)?;
        let id = MobId(self.next_id);
        self.next_id += 1;
        debug!(%id, kind, %at, "mob spawned");
        self.mobs.push(MobSlot {
            id,
            kind: kind.to_owned(),
            entity,
            behavior: BehaviorStack::new(),
        });
        Ok(id)
    }

    /// Kill a mob: it plays its death animation and its AI stops.
    pub fn defeat(&mut self, id: MobId) -> LevelResult<()> {
        let slot = self.mob_mut(id)?;
        slot.entity.die();
        debug!(%id, "mob defeated");
        Ok(())
    }

    /// Take a mob out of the level entirely.
    pub fn remove_mob(&mut self, id: MobId) -> Option<MobSlot> {
        let pos = self.mobs.iter().position(|slot| slot.id == id)?;
        Some(self.mobs.remove(pos))
    }

    /// Every live mob's current path, for debug overlays.
    pub fn debug_paths(&self) -> Vec<(MobId, &Path)> {
        self.mobs
            .iter()
            .filter(|slot| !slot.entity.is_dead())
            .filter_map(|slot| slot.behavior.current_path().map(|path| (slot.id, path)))
            .collect()
    }

    /// Advance the level by one frame that lasted `elapsed`.
    pub fn update<O: LevelObserver>(&mut self, elapsed: Duration, observer: &mut O) {
        self.clock.advance(elapsed);
        let frame = self.clock.current_frame;
        observer.on_tick_start(frame);

        let world = World::new(
            &self.grid,
            self.player,
            &self.pathfinder,
            &self.resolver,
            &self.config,
        );

        for slot in &mut self.mobs {
            slot.entity.update(elapsed);
            if slot.entity.is_dead() {
                continue;
            }
            let before = slot.behavior.kind();
            slot.behavior.update(&mut slot.entity, elapsed);
            let after = slot.behavior.examine_world(&mut slot.entity, &world);
            if after != before {
                observer.on_state_change(frame, slot.id, before, after);
            }
        }

        for (id, path) in self.debug_paths() {
            observer.on_path(frame, id, path);
        }
        observer.on_tick_end(frame, self.player, &self.mobs);
    }
}
