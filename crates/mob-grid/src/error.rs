//! Grid-subsystem error type.

use thiserror::Error;

use mob_core::Cell;

/// Errors produced by `mob-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("no path from {from} to {to}")]
    NoPath { from: Cell, to: Cell },

    #[error("cell {cell} is outside the {width}x{height} grid")]
    CellOutOfRange { cell: Cell, width: u32, height: u32 },

    #[error("tile index {index} is outside a grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("expected {expected} tiles for the grid, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("layout parse error: {0}")]
    Parse(String),
}

pub type GridResult<T> = Result<T, GridError>;
