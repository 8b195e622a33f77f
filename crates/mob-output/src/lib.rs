//! `mob-output`: frame trace writers for mob AI runs.
//!
//! | Backend | Files created                                             |
//! |---------|-----------------------------------------------------------|
//! | CSV     | `mob_snapshots.csv`, `transitions.csv`, `paths.csv`       |
//!
//! Writers implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `mob_level::LevelObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mob_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer).snapshot_interval(10);
//! for _ in 0..600 {
//!     level.update(dt, &mut obs);
//! }
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{MobSnapshotRow, PathRow, TransitionRow};
pub use writer::OutputWriter;
