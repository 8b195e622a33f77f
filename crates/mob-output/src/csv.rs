//! CSV trace backend.
//!
//! Creates three files in the output directory:
//! - `mob_snapshots.csv`
//! - `transitions.csv`
//! - `paths.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use mob_agent::FrameSet;

use crate::writer::OutputWriter;
use crate::{MobSnapshotRow, OutputResult, PathRow, TransitionRow};

/// Writes a level trace to three CSV files.
pub struct CsvTraceWriter {
    snapshots:   Writer<File>,
    transitions: Writer<File>,
    paths:       Writer<File>,
    finished:    bool,
}

impl CsvTraceWriter {
    /// Create the three CSV files in `dir` (which must exist) and write their
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("mob_snapshots.csv"))?;
        snapshots.write_record(["mob_id", "frame", "x", "y", "state", "frames", "dead"])?;

        let mut transitions = Writer::from_path(dir.join("transitions.csv"))?;
        transitions.write_record(["frame", "mob_id", "from", "to"])?;

        let mut paths = Writer::from_path(dir.join("paths.csv"))?;
        paths.write_record(["frame", "mob_id", "step", "cell_x", "cell_y"])?;

        Ok(Self { snapshots, transitions, paths, finished: false })
    }
}

fn frame_set_name(set: FrameSet) -> &'static str {
    match set {
        FrameSet::Idle   => "idle",
        FrameSet::Search => "search",
        FrameSet::Hunt   => "hunt",
        FrameSet::Dying  => "dying",
    }
}

impl OutputWriter for CsvTraceWriter {
    fn write_snapshots(&mut self, rows: &[MobSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.mob_id.to_string(),
                row.frame.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.state.as_str().to_owned(),
                frame_set_name(row.frames).to_owned(),
                (row.dead as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()> {
        self.transitions.write_record(&[
            row.frame.to_string(),
            row.mob_id.to_string(),
            row.from.as_str().to_owned(),
            row.to.as_str().to_owned(),
        ])?;
        Ok(())
    }

    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        for row in rows {
            self.paths.write_record(&[
                row.frame.to_string(),
                row.mob_id.to_string(),
                row.step.to_string(),
                row.cell_x.to_string(),
                row.cell_y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.transitions.flush()?;
        self.paths.flush()?;
        Ok(())
    }
}
