//! Fluent builder for constructing a [`Level`].

use mob_agent::SpawnRegistry;
use mob_core::{AiConfig, Vec2};
use mob_grid::{AStar, MoveResolver, OccupancyGrid, Pathfinder, SlideResolver};
use tracing::warn;

use crate::{Level, LevelResult, SpawnMarker};

/// Default mob box: one cell wide and tall.
const DEFAULT_HALF_EXTENTS: Vec2 = Vec2::new(0.5, 0.5);

/// Fluent builder for [`Level<P, M>`].
///
/// # Required inputs
///
/// - [`OccupancyGrid`]: the collision layer, fully written
/// - [`SpawnRegistry`]: resolves marker kinds to mob stats
/// - `P: Pathfinder` and `M: MoveResolver`
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                  |
/// |-----------------------|--------------------------|
/// | `.config(c)`          | `AiConfig::default()`    |
/// | `.player(p)`          | origin                   |
/// | `.markers(v)`         | no markers               |
/// | `.mob_half_extents(h)`| `(0.5, 0.5)`             |
///
/// A `start` marker overrides `.player`.  For [`standard`][Self::standard]
/// the A* connectivity is read from whichever config is in place at
/// [`build`][Self::build] time.
pub struct LevelBuilder<P: Pathfinder, M: MoveResolver> {
    grid:         OccupancyGrid,
    registry:     SpawnRegistry,
    config:       AiConfig,
    player:       Vec2,
    markers:      Vec<SpawnMarker>,
    half_extents: Vec2,
    pathfinder:   PathfinderSource<P>,
    resolver:     M,
}

/// Either a caller-supplied pathfinder or one made from the final config.
enum PathfinderSource<P> {
    Given(P),
    FromConfig(fn(&AiConfig) -> P),
}

impl LevelBuilder<AStar, SlideResolver> {
    /// A* (connectivity from the config) with slide collision.
    pub fn standard(grid: OccupancyGrid, registry: SpawnRegistry, config: AiConfig) -> Self {
        Self::with_source(grid, registry, PathfinderSource::FromConfig(AStar::from_config), SlideResolver)
            .config(config)
    }
}

impl<P: Pathfinder, M: MoveResolver> LevelBuilder<P, M> {
    pub fn new(grid: OccupancyGrid, registry: SpawnRegistry, pathfinder: P, resolver: M) -> Self {
        Self::with_source(grid, registry, PathfinderSource::Given(pathfinder), resolver)
    }

    fn with_source(
        grid: OccupancyGrid,
        registry: SpawnRegistry,
        pathfinder: PathfinderSource<P>,
        resolver: M,
    ) -> Self {
        Self {
            grid,
            registry,
            config: AiConfig::default(),
            player: Vec2::ZERO,
            markers: Vec::new(),
            half_extents: DEFAULT_HALF_EXTENTS,
            pathfinder,
            resolver,
        }
    }

    pub fn config(mut self, config: AiConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player(mut self, at: Vec2) -> Self {
        self.player = at;
        self
    }

    pub fn markers(mut self, markers: Vec<SpawnMarker>) -> Self {
        self.markers.extend(markers);
        self
    }

    /// Queue a single mob spawn.
    pub fn mob(mut self, kind: impl Into<String>, at: Vec2) -> Self {
        self.markers.push(SpawnMarker::Mob { kind: kind.into(), at });
        self
    }

    pub fn mob_half_extents(mut self, half_extents: Vec2) -> Self {
        self.half_extents = half_extents;
        self
    }

    /// Validate the configuration, spawn every marked mob, and return a
    /// ready-to-run [`Level`].
    ///
    /// Fails on an invalid config or a marker naming an unregistered kind.
    /// Spawns whose cell lies outside the grid are dropped with a warning.
    pub fn build(self) -> LevelResult<Level<P, M>> {
        self.config.validate()?;
        let grid = self.grid.with_cell_size(self.config.cell_size);
        let pathfinder = match self.pathfinder {
            PathfinderSource::Given(p) => p,
            PathfinderSource::FromConfig(make) => make(&self.config),
        };

        let mut level = Level::new(
            grid,
            self.registry,
            self.config,
            pathfinder,
            self.resolver,
            self.half_extents,
        );
        level.set_player_position(self.player);

        for marker in self.markers {
            match marker {
                SpawnMarker::PlayerStart(at) => level.set_player_position(at),
                SpawnMarker::Mob { kind, at } => {
                    let cell = level.grid.cell_at(at, level.config.half_extent);
                    if !level.grid.contains(cell) {
                        warn!(%kind, %at, %cell, "spawn outside the grid; dropped");
                        continue;
                    }
                    level.spawn_mob(&kind, at)?;
                }
            }
        }
        Ok(level)
    }
}
