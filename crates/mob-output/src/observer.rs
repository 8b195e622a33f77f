//! `TraceObserver<W>`: bridges `LevelObserver` to an `OutputWriter`.

use mob_agent::Mob;
use mob_behavior::StateKind;
use mob_core::{Frame, MobId, Vec2};
use mob_grid::Path;
use mob_level::{LevelObserver, MobSlot};

use crate::row::{MobSnapshotRow, PathRow, TransitionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`LevelObserver`] that records snapshots, transitions, and debug paths
/// to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value; [`finish`][Self::finish] reports the first one.
pub struct TraceObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    record_paths:      bool,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    /// Snapshot every frame and record paths.
    pub fn new(writer: W) -> Self {
        Self { writer, snapshot_interval: 1, record_paths: true, last_error: None }
    }

    /// Snapshot only every `n`th frame (`0` is treated as `1`).
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n.max(1);
        self
    }

    pub fn record_paths(mut self, on: bool) -> Self {
        self.record_paths = on;
        self
    }

    /// Take the stored write error (if any), leaving the observer clean.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, then report the first error seen during the run.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.last_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> LevelObserver for TraceObserver<W> {
    fn on_state_change(&mut self, frame: Frame, mob: MobId, from: StateKind, to: StateKind) {
        let row = TransitionRow { frame: frame.0, mob_id: mob.0, from, to };
        let result = self.writer.write_transition(&row);
        self.store_err(result);
    }

    fn on_path(&mut self, frame: Frame, mob: MobId, path: &Path) {
        if !self.record_paths || path.is_empty() {
            return;
        }
        let rows: Vec<PathRow> = path
            .cells()
            .iter()
            .enumerate()
            .map(|(step, cell)| PathRow {
                frame:  frame.0,
                mob_id: mob.0,
                step:   step as u32,
                cell_x: cell.x,
                cell_y: cell.y,
            })
            .collect();
        let result = self.writer.write_path(&rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, frame: Frame, _player: Vec2, mobs: &[MobSlot]) {
        if frame.0 % self.snapshot_interval != 0 {
            return;
        }
        let rows: Vec<MobSnapshotRow> = mobs
            .iter()
            .map(|slot| {
                let pos = slot.entity.pos();
                MobSnapshotRow {
                    mob_id: slot.id.0,
                    frame:  frame.0,
                    x:      pos.x,
                    y:      pos.y,
                    state:  slot.behavior.kind(),
                    frames: slot.entity.animation().set(),
                    dead:   slot.entity.is_dead(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }
}
