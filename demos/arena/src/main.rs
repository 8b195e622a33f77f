//! arena: two bosses, one walled room, and a player walking a fixed route.
//!
//! Runs 20 simulated seconds at 60 frames per second and writes a CSV trace
//! to `output/arena/`.  Pass a JSON file as the first argument to override
//! the AI tunables, e.g. `{"max_path_age": 4, "diagonal_moves": false}`.
//!
//! Set `RUST_LOG=mob_behavior=debug` to watch state transitions and path
//! recomputation.

use std::io::Cursor;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use mob_agent::{Mob, SpawnRegistry};
use mob_behavior::StateKind;
use mob_core::{AiConfig, Frame, MobId, Vec2};
use mob_grid::OccupancyGrid;
use mob_level::{LevelBuilder, LevelObserver, MobSlot, load_markers_reader};
use mob_output::{CsvTraceWriter, TraceObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const FPS:            u64  = 60;
const SIM_SECONDS:    u64  = 20;
const SNAPSHOT_EVERY: u64  = 6; // 10 snapshots per second
const PLAYER_SPEED:   f32  = 0.05;
const OUTPUT_DIR:     &str = "output/arena";

// ── Map ───────────────────────────────────────────────────────────────────────

// First row is y = 0.  '#' is a collision tile.
const MAP: [&str; 16] = [
    "########################",
    "#......................#",
    "#......................#",
    "#...######.............#",
    "#........#.............#",
    "#........#......####...#",
    "#........#.........#...#",
    "#..................#...#",
    "#..................#...#",
    "#.....#####........#...#",
    "#......................#",
    "#..............#########",
    "#......................#",
    "#......................#",
    "#......................#",
    "########################",
];

const MARKERS_CSV: &str = "\
name,type,x,y\n\
start,,2.0,13.0\n\
boss,boss1,12.0,2.0\n\
boss,boss2,14.0,8.0\n\
sprite,torch,1.0,1.0\n\
";

/// Player route through open floor, walked cyclically.
const ROUTE: [Vec2; 8] = [
    Vec2::new(2.0, 13.0),
    Vec2::new(13.0, 13.0),
    Vec2::new(13.0, 10.0),
    Vec2::new(2.0, 10.0),
    Vec2::new(2.0, 2.0),
    Vec2::new(6.0, 2.0),
    Vec2::new(2.0, 2.0),
    Vec2::new(2.0, 10.0),
];

// ── Scripted player ───────────────────────────────────────────────────────────

struct Walker {
    pos:    Vec2,
    target: usize,
}

impl Walker {
    fn new(start: Vec2) -> Self {
        Self { pos: start, target: 1 }
    }

    fn step(&mut self) -> Vec2 {
        let goal = ROUTE[self.target];
        let gap = goal - self.pos;
        if gap.len() <= PLAYER_SPEED {
            self.pos = goal;
            self.target = (self.target + 1) % ROUTE.len();
        } else if let Some(dir) = gap.normalize() {
            self.pos += dir * PLAYER_SPEED;
        }
        self.pos
    }
}

// ── Observer wrapper to count events ──────────────────────────────────────────

struct CountingObserver<W: mob_output::OutputWriter> {
    inner:       TraceObserver<W>,
    transitions: usize,
    hunts:       usize,
}

impl<W: mob_output::OutputWriter> CountingObserver<W> {
    fn new(inner: TraceObserver<W>) -> Self {
        Self { inner, transitions: 0, hunts: 0 }
    }
}

impl<W: mob_output::OutputWriter> LevelObserver for CountingObserver<W> {
    fn on_state_change(&mut self, frame: Frame, mob: MobId, from: StateKind, to: StateKind) {
        self.transitions += 1;
        if to == StateKind::Hunting {
            self.hunts += 1;
            info!(%frame, %mob, "boss spotted the player");
        }
        self.inner.on_state_change(frame, mob, from, to);
    }

    fn on_path(&mut self, frame: Frame, mob: MobId, path: &mob_grid::Path) {
        self.inner.on_path(frame, mob, path);
    }

    fn on_tick_end(&mut self, frame: Frame, player: Vec2, mobs: &[MobSlot]) {
        self.inner.on_tick_end(frame, player, mobs);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(path: Option<String>) -> Result<AiConfig> {
    let Some(path) = path else {
        return Ok(AiConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: AiConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // 1. Config.
    let config = load_config(std::env::args().nth(1))?;
    info!(?config, "AI config");

    // 2. Collision layer and spawn markers.
    let grid = OccupancyGrid::from_ascii(&MAP)?;
    let markers = load_markers_reader(Cursor::new(MARKERS_CSV))?;
    info!(
        width = grid.width(),
        height = grid.height(),
        walls = grid.blocked_count(),
        markers = markers.len(),
        "map loaded"
    );

    // 3. Level.
    let mut level = LevelBuilder::standard(grid, SpawnRegistry::with_presets(), config)
        .markers(markers)
        .build()?;
    let mut player = Walker::new(level.player());

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvTraceWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(TraceObserver::new(writer).snapshot_interval(SNAPSHOT_EVERY));

    // 5. Run.
    let dt = Duration::from_micros(1_000_000 / FPS);
    let t0 = Instant::now();
    for _ in 0..FPS * SIM_SECONDS {
        level.set_player_position(player.step());
        level.update(dt, &mut obs);
    }
    let wall = t0.elapsed();
    obs.inner.finish()?;

    // 6. Summary.
    println!("Simulated {} in {:.3} s", level.clock, wall.as_secs_f64());
    println!("  transitions : {}", obs.transitions);
    println!("  hunts       : {}", obs.hunts);
    println!("  trace       : {OUTPUT_DIR}/");
    println!();
    println!("{:<10} {:<8} {:<11} {:<16}", "Mob", "Kind", "State", "Position");
    println!("{}", "-".repeat(46));
    for slot in level.mobs() {
        println!(
            "{:<10} {:<8} {:<11} {:<16}",
            slot.id.to_string(),
            slot.kind,
            slot.behavior.kind().as_str(),
            slot.entity.pos().to_string(),
        );
    }

    Ok(())
}
