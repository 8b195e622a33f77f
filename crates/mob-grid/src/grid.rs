//! Occupancy grid and the world ↔ cell mapping.
//!
//! # Data layout
//!
//! One `bool` per cell in a contiguous row-major `Vec`:
//!
//! ```text
//! blocked[ y * width + x ]
//! ```
//!
//! Row `y = 0` is the bottom of the level (world y grows upward).
//!
//! # Quantization
//!
//! Entity positions are the bottom-left anchor of the entity's box.  The
//! half extent shifts that anchor to the box centre before flooring, so the
//! cell an entity "occupies" is the one under its centre:
//!
//! ```text
//! grid_position(w, h)    = floor((w + h) / cell_size)
//! inverse_position(i, h) = (i + 0.5) * cell_size - h
//! ```
//!
//! `inverse_position` returns the anchor that centres the same box on the
//! cell, so a path requested with half extent `h` maps back to world space
//! with the same `h`.

use mob_core::{Cell, Rect, Vec2};

use crate::{GridError, GridResult};

/// Level-scoped field of blocked/free cells.
///
/// Dimensions are fixed at construction.  Writes ([`set`](Self::set),
/// [`set_index`](Self::set_index)) belong to level loading; during play the
/// level only hands out `&OccupancyGrid`.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    width:     u32,
    height:    u32,
    cell_size: f32,
    blocked:   Vec<bool>,
}

impl OccupancyGrid {
    /// An all-free grid with one world unit per cell.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cell_size: 1.0,
            blocked: vec![false; width as usize * height as usize],
        }
    }

    /// Override the world size of one cell.
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Build from a row-major collision layer where `true` marks a blocking
    /// tile.
    pub fn from_tiles(width: u32, height: u32, tiles: &[bool]) -> GridResult<Self> {
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(GridError::DimensionMismatch { expected, got: tiles.len() });
        }
        let mut grid = Self::new(width, height);
        for (i, &tile) in tiles.iter().enumerate() {
            if tile {
                grid.set_index(i, true)?;
            }
        }
        Ok(grid)
    }

    /// Build from text rows: `#` is blocked, `.` is free.  The first row is
    /// `y = 0`.  Handy for tests and hand-authored arenas.
    pub fn from_ascii(rows: &[&str]) -> GridResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width as usize {
                return Err(GridError::Parse(format!(
                    "row {y} has {} columns, expected {width}",
                    row.chars().count()
                )));
            }
            for ch in row.chars() {
                match ch {
                    '#' => tiles.push(true),
                    '.' => tiles.push(false),
                    other => {
                        return Err(GridError::Parse(format!(
                            "unexpected tile {other:?} in row {y}"
                        )));
                    }
                }
            }
        }
        Self::from_tiles(width, height, &tiles)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.width
            && (cell.y as u32) < self.height
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Mark `cell` blocked or free.  Out-of-range cells are rejected and
    /// nothing is written.
    pub fn set(&mut self, cell: Cell, blocked: bool) -> GridResult<()> {
        let i = self.index(cell).ok_or(GridError::CellOutOfRange {
            cell,
            width:  self.width,
            height: self.height,
        })?;
        self.blocked[i] = blocked;
        Ok(())
    }

    /// Row-major variant of [`set`](Self::set), matching tile-layer order.
    pub fn set_index(&mut self, index: usize, blocked: bool) -> GridResult<()> {
        let len = self.blocked.len();
        let slot = self
            .blocked
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange { index, len })?;
        *slot = blocked;
        Ok(())
    }

    /// `true` if `cell` is blocked.  Out-of-range cells read as blocked.
    #[inline]
    pub fn get(&self, cell: Cell) -> bool {
        self.index(cell).is_none_or(|i| self.blocked[i])
    }

    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        !self.get(cell)
    }

    // ── World ↔ cell mapping ──────────────────────────────────────────────

    /// Quantize one world coordinate for an entity of the given half extent.
    #[inline]
    pub fn grid_position(&self, world: f32, half_extent: f32) -> i32 {
        ((world + half_extent) / self.cell_size).floor() as i32
    }

    /// World anchor coordinate that centres an entity of `half_extent` on
    /// grid coordinate `index`.
    #[inline]
    pub fn inverse_position(&self, index: i32, half_extent: f32) -> f32 {
        (index as f32 + 0.5) * self.cell_size - half_extent
    }

    /// [`grid_position`](Self::grid_position) applied to both axes.
    #[inline]
    pub fn cell_at(&self, point: Vec2, half_extent: f32) -> Cell {
        Cell::new(
            self.grid_position(point.x, half_extent),
            self.grid_position(point.y, half_extent),
        )
    }

    /// [`inverse_position`](Self::inverse_position) applied to both axes.
    #[inline]
    pub fn world_at(&self, cell: Cell, half_extent: f32) -> Vec2 {
        Vec2::new(
            self.inverse_position(cell.x, half_extent),
            self.inverse_position(cell.y, half_extent),
        )
    }

    /// World-space square covered by `cell`.
    pub fn cell_bounds(&self, cell: Cell) -> Rect {
        let min = Vec2::new(cell.x as f32 * self.cell_size, cell.y as f32 * self.cell_size);
        Rect::new(min, min + Vec2::new(self.cell_size, self.cell_size))
    }

    /// Every cell whose square strictly overlaps `rect`, in row-major order.
    /// Cells outside the grid are included; callers read them as blocked.
    pub fn cells_overlapping(&self, rect: Rect) -> impl Iterator<Item = Cell> + use<> {
        let x0 = (rect.min.x / self.cell_size).floor() as i32;
        let y0 = (rect.min.y / self.cell_size).floor() as i32;
        let x1 = ((rect.max.x / self.cell_size).ceil() as i32 - 1).max(x0);
        let y1 = ((rect.max.y / self.cell_size).ceil() as i32 - 1).max(y0);
        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| Cell::new(x, y)))
    }
}
