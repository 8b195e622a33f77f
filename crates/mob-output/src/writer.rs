//! The `OutputWriter` trait implemented by trace backends.

use crate::{MobSnapshotRow, OutputResult, PathRow, TransitionRow};

/// Trait implemented by trace writers.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and
/// surfaced from its `finish`.
pub trait OutputWriter {
    fn write_snapshots(&mut self, rows: &[MobSnapshotRow]) -> OutputResult<()>;

    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()>;

    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
