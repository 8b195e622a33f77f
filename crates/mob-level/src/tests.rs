//! Integration tests for mob-level.

use std::io::Cursor;
use std::time::Duration;

use mob_agent::{FrameSet, Mob, SpawnRegistry};
use mob_behavior::StateKind;
use mob_core::{AiConfig, Frame, MobId, Vec2};
use mob_grid::{OccupancyGrid, Path};

use crate::{LevelBuilder, LevelError, LevelObserver, MobSlot, NoopObserver, SpawnMarker};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: Duration = Duration::from_millis(16);

fn standard(size: u32) -> LevelBuilder<mob_grid::AStar, mob_grid::SlideResolver> {
    LevelBuilder::standard(
        OccupancyGrid::new(size, size),
        SpawnRegistry::with_presets(),
        AiConfig::default(),
    )
}

#[derive(Default)]
struct Recorder {
    starts:      Vec<Frame>,
    ends:        Vec<Frame>,
    changes:     Vec<(MobId, StateKind, StateKind)>,
    paths:       usize,
    last_mobs:   usize,
}

impl LevelObserver for Recorder {
    fn on_tick_start(&mut self, frame: Frame) {
        self.starts.push(frame);
    }

    fn on_state_change(&mut self, _frame: Frame, mob: MobId, from: StateKind, to: StateKind) {
        self.changes.push((mob, from, to));
    }

    fn on_path(&mut self, _frame: Frame, _mob: MobId, _path: &Path) {
        self.paths += 1;
    }

    fn on_tick_end(&mut self, frame: Frame, _player: Vec2, mobs: &[MobSlot]) {
        self.ends.push(frame);
        self.last_mobs = mobs.len();
    }
}

// ── Spawn markers ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod markers {
    use super::*;
    use crate::{load_markers_path, load_markers_reader};

    #[test]
    fn start_and_boss_rows() {
        let csv = "name,type,x,y\nstart,,2.0,3.0\nboss,boss1,12.0,6.5\nsprite,torch,1,1\n";
        let markers = load_markers_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            markers,
            vec![
                SpawnMarker::PlayerStart(Vec2::new(2.0, 3.0)),
                SpawnMarker::Mob { kind: "boss1".into(), at: Vec2::new(12.0, 6.5) },
            ]
        );
    }

    #[test]
    fn boss_without_type_errors() {
        let csv = "name,type,x,y\nboss,,1,1\n";
        let err = load_markers_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, LevelError::Parse(_)));
    }

    #[test]
    fn malformed_coordinate_errors() {
        let csv = "name,type,x,y\nstart,,north,1\n";
        assert!(matches!(
            load_markers_reader(Cursor::new(csv)),
            Err(LevelError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markers.csv");
        std::fs::write(&path, "name,type,x,y\nboss,boss2,4,4\n").unwrap();
        let markers = load_markers_path(&path).unwrap();
        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_markers_path(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LevelError::Io(_)));
    }
}

// ── LevelBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn builds_with_markers() {
        let level = standard(20)
            .markers(vec![
                SpawnMarker::PlayerStart(Vec2::new(1.0, 1.0)),
                SpawnMarker::Mob { kind: "boss1".into(), at: Vec2::new(10.0, 10.0) },
                SpawnMarker::Mob { kind: "boss2".into(), at: Vec2::new(15.0, 3.0) },
            ])
            .build()
            .unwrap();
        assert_eq!(level.player(), Vec2::new(1.0, 1.0));
        assert_eq!(level.mobs().len(), 2);
        assert_eq!(level.mobs()[0].id, MobId(0));
        assert_eq!(level.mobs()[1].kind, "boss2");
        assert_eq!(level.mobs()[0].behavior.kind(), StateKind::Dormant);
    }

    #[test]
    fn unknown_kind_fails_build() {
        let result = standard(10).mob("dragon", Vec2::new(1.0, 1.0)).build();
        assert!(matches!(result, Err(LevelError::Agent(_))));
    }

    #[test]
    fn invalid_config_fails_build() {
        let config = AiConfig { arrive_distance: 0.0, ..AiConfig::default() };
        let result = standard(10).config(config).build();
        assert!(matches!(result, Err(LevelError::Core(_))));
    }

    #[test]
    fn out_of_grid_spawn_dropped() {
        let level = standard(10)
            .mob("boss2", Vec2::new(40.0, 2.0))
            .mob("boss2", Vec2::new(2.0, 2.0))
            .build()
            .unwrap();
        assert_eq!(level.mobs().len(), 1);
        assert_eq!(level.mobs()[0].entity.pos(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn later_config_sets_standard_connectivity() {
        let config = AiConfig { diagonal_moves: false, ..AiConfig::default() };
        let level = standard(10).config(config).build().unwrap();
        assert!(!level.pathfinder().diagonal);

        let level = standard(10).build().unwrap();
        assert!(level.pathfinder().diagonal);
    }

    #[test]
    fn supplied_pathfinder_is_kept() {
        let level = LevelBuilder::new(
            OccupancyGrid::new(10, 10),
            SpawnRegistry::with_presets(),
            mob_grid::AStar::four_connected(),
            mob_grid::SlideResolver,
        )
        .build()
        .unwrap();
        assert!(!level.pathfinder().diagonal);
    }

    #[test]
    fn config_cell_size_applied_to_grid() {
        let config = AiConfig { cell_size: 2.0, ..AiConfig::default() };
        let level = standard(10).config(config).build().unwrap();
        assert_eq!(level.grid().cell_size(), 2.0);
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame_loop {
    use super::*;

    #[test]
    fn clock_and_observer_hooks() {
        let mut level = standard(20)
            .player(Vec2::new(19.0, 19.0))
            .mob("boss2", Vec2::new(2.0, 2.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        for _ in 0..3 {
            level.update(DT, &mut rec);
        }
        assert_eq!(level.clock.current_frame, Frame(3));
        assert_eq!(level.clock.elapsed, DT * 3);
        assert_eq!(rec.starts, vec![Frame(1), Frame(2), Frame(3)]);
        assert_eq!(rec.ends.len(), 3);
        assert_eq!(rec.last_mobs, 1);
        assert_eq!(rec.paths, 3);
        assert_eq!(
            rec.changes,
            vec![(MobId(0), StateKind::Dormant, StateKind::Searching)]
        );
    }

    #[test]
    fn boss2_hunts_then_gives_up() {
        let mut level = standard(20)
            .player(Vec2::new(18.0, 18.0))
            .mob("boss2", Vec2::new(5.0, 5.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        level.update(DT, &mut rec);
        assert_eq!(level.mobs()[0].behavior.kind(), StateKind::Searching);

        level.set_player_position(Vec2::new(8.0, 5.0));
        level.update(DT, &mut rec);
        assert_eq!(level.mobs()[0].behavior.kind(), StateKind::Hunting);
        assert_eq!(level.mobs()[0].entity.animation().set(), FrameSet::Hunt);

        // boss2 holds a grudge for 20 s.
        level.set_player_position(Vec2::new(19.0, 19.0));
        level.update(Duration::from_secs(10), &mut rec);
        assert_eq!(level.mobs()[0].behavior.kind(), StateKind::Hunting);
        level.update(Duration::from_secs(11), &mut rec);
        assert_eq!(level.mobs()[0].behavior.kind(), StateKind::Searching);

        assert_eq!(
            rec.changes.iter().map(|c| c.2).collect::<Vec<_>>(),
            vec![StateKind::Searching, StateKind::Hunting, StateKind::Searching]
        );
    }

    #[test]
    fn boss1_patrols() {
        let spawn = Vec2::new(10.0, 5.0);
        let mut level = standard(20)
            .player(Vec2::new(19.0, 19.0))
            .mob("boss1", spawn)
            .build()
            .unwrap();
        for _ in 0..30 {
            level.update(DT, &mut NoopObserver);
        }
        let pos = level.mobs()[0].entity.pos();
        assert!(pos.x < spawn.x, "boss1 should head for its first waypoint, at {pos}");
        assert!(!level.debug_paths().is_empty());
    }

    #[test]
    fn defeated_mob_stops_thinking() {
        let mut level = standard(20)
            .player(Vec2::new(19.0, 19.0))
            .mob("boss1", Vec2::new(10.0, 5.0))
            .build()
            .unwrap();
        for _ in 0..5 {
            level.update(DT, &mut NoopObserver);
        }
        let id = level.mobs()[0].id;
        level.defeat(id).unwrap();
        let frozen = level.mobs()[0].entity.pos();

        let mut rec = Recorder::default();
        for _ in 0..5 {
            level.update(DT, &mut rec);
        }
        let slot = level.mob(id).unwrap();
        assert_eq!(slot.entity.pos(), frozen);
        assert_eq!(slot.entity.animation().set(), FrameSet::Dying);
        assert_eq!(rec.paths, 0);
        assert!(level.debug_paths().is_empty());
    }

    #[test]
    fn remove_and_unknown_ids() {
        let mut level = standard(10).mob("boss2", Vec2::new(2.0, 2.0)).build().unwrap();
        let id = level.mobs()[0].id;
        assert!(level.remove_mob(id).is_some());
        assert!(level.remove_mob(id).is_none());
        assert!(matches!(level.defeat(id), Err(LevelError::UnknownMob(_))));

        // Ids are not reused.
        let next = level.spawn_mob("boss2", Vec2::new(3.0, 3.0)).unwrap();
        assert_eq!(next, MobId(1));
    }
}
