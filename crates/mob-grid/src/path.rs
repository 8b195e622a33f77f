//! Grid pathfinding: the `Pathfinder` trait, the default A* search, and the
//! world-space `find_path` entry point with its blocked-start escape hatch.
//!
//! # Pluggability
//!
//! Behavior states call [`find_path`], which is generic over [`Pathfinder`],
//! so a level can swap in another search (jump-point, flow fields) without
//! touching the state machine.
//!
//! # Caching
//!
//! Nothing here caches.  Callers hold on to a [`Path`] and decide when it is
//! stale; that throttle is what bounds per-frame search cost.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mob_core::{AiConfig, Cell, Vec2};
use tracing::{debug, trace};

use crate::{GridError, GridResult, OccupancyGrid};

// ── Path ──────────────────────────────────────────────────────────────────────

/// Ordered cells from start to goal, both inclusive.  Empty means "no path".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Cell-to-cell search over an [`OccupancyGrid`].
pub trait Pathfinder {
    /// Shortest path from `start` to `goal`, both inclusive.
    ///
    /// Returns [`GridError::NoPath`] when either end is blocked or the goal
    /// is unreachable.  `start == goal` on a free cell is a one-cell path.
    fn search(&self, grid: &OccupancyGrid, start: Cell, goal: Cell) -> GridResult<Path>;
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// Orthogonal steps first, then diagonals; 4-connected search uses `[..4]`.
const STEPS: [(i32, i32); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// A* with uniform step cost.
///
/// | Connectivity | Heuristic  |
/// |--------------|------------|
/// | 8 (default)  | Chebyshev  |
/// | 4            | Manhattan  |
///
/// Both heuristics are consistent for unit steps, so the first time the goal
/// is popped its path is optimal.  Diagonal steps are refused when either
/// orthogonal neighbour is blocked, so paths never clip a wall corner.
#[derive(Clone, Copy, Debug)]
pub struct AStar {
    pub diagonal: bool,
}

impl AStar {
    pub fn eight_connected() -> Self {
        Self { diagonal: true }
    }

    pub fn four_connected() -> Self {
        Self { diagonal: false }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self { diagonal: config.diagonal_moves }
    }

    #[inline]
    fn heuristic(&self, from: Cell, to: Cell) -> u32 {
        let dx = from.x.abs_diff(to.x);
        let dy = from.y.abs_diff(to.y);
        if self.diagonal { dx.max(dy) } else { dx + dy }
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::eight_connected()
    }
}

impl Pathfinder for AStar {
    fn search(&self, grid: &OccupancyGrid, start: Cell, goal: Cell) -> GridResult<Path> {
        if grid.get(start) || grid.get(goal) {
            return Err(GridError::NoPath { from: start, to: goal });
        }
        if start == goal {
            return Ok(Path::new(vec![start]));
        }

        let width = grid.width() as usize;
        let index = |c: Cell| c.y as usize * width + c.x as usize;

        let n = grid.len();
        // g[i] = best known step count to reach cell i.
        let mut g = vec![u32::MAX; n];
        // came_from[i] = index of the predecessor; usize::MAX for unreached.
        let mut came_from = vec![usize::MAX; n];
        let mut closed = vec![false; n];

        g[index(start)] = 0;

        // Min-heap on (f, h, cell).  Preferring low h among equal f keeps
        // the search pointed at the goal; the cell breaks remaining ties
        // deterministically.
        let mut open: BinaryHeap<Reverse<(u32, u32, Cell)>> = BinaryHeap::new();
        let h0 = self.heuristic(start, goal);
        open.push(Reverse((h0, h0, start)));

        let steps = if self.diagonal { &STEPS[..] } else { &STEPS[..4] };

        while let Some(Reverse((_, _, cell))) = open.pop() {
            let ci = index(cell);
            if closed[ci] {
                continue;
            }
            closed[ci] = true;

            if cell == goal {
                return Ok(reconstruct(&came_from, width, index(start), ci));
            }

            for &(dx, dy) in steps {
                let next = cell.offset(dx, dy);
                if grid.get(next) {
                    continue;
                }
                if dx != 0 && dy != 0
                    && (grid.get(cell.offset(dx, 0)) || grid.get(cell.offset(0, dy)))
                {
                    continue;
                }
                let ni = index(next);
                if closed[ni] {
                    continue;
                }
                let tentative = g[ci] + 1;
                if tentative < g[ni] {
                    g[ni] = tentative;
                    came_from[ni] = ci;
                    let h = self.heuristic(next, goal);
                    open.push(Reverse((tentative + h, h, next)));
                }
            }
        }

        Err(GridError::NoPath { from: start, to: goal })
    }
}

fn reconstruct(came_from: &[usize], width: usize, start: usize, goal: usize) -> Path {
    let to_cell = |i: usize| Cell::new((i % width) as i32, (i / width) as i32);
    let mut cells = vec![to_cell(goal)];
    let mut cur = goal;
    while cur != start {
        cur = came_from[cur];
        cells.push(to_cell(cur));
    }
    cells.reverse();
    Path::new(cells)
}

// ── World-space entry point ───────────────────────────────────────────────────

/// Quantization and escape-hatch settings for [`find_path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathOptions {
    /// Half extent used to quantize both endpoints.
    pub half_extent: f32,
    /// Chebyshev radius of the window retried around a blocked start cell.
    pub retry_radius: i32,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self { half_extent: 0.5, retry_radius: 4 }
    }
}

impl From<&AiConfig> for PathOptions {
    fn from(config: &AiConfig) -> Self {
        Self { half_extent: config.half_extent, retry_radius: config.retry_radius }
    }
}

/// Path between two world points, in grid cells.
///
/// Quantizes both points, then searches.  If that fails while the start cell
/// is itself blocked (an agent's box routinely overlaps a wall tile), every
/// free cell in the `(2r+1)²` window around the start is tried in column-major
/// order (`dx` outer, `dy` inner, centre skipped) and the first successful
/// search wins.
///
/// Never fails: an empty [`Path`] means "hold position and retry later".
pub fn find_path<P: Pathfinder + ?Sized>(
    grid:       &OccupancyGrid,
    pathfinder: &P,
    start:      Vec2,
    goal:       Vec2,
    options:    &PathOptions,
) -> Path {
    let from = grid.cell_at(start, options.half_extent);
    let to = grid.cell_at(goal, options.half_extent);

    let err = match pathfinder.search(grid, from, to) {
        Ok(path) => return path,
        Err(err) => err,
    };
    trace!(%from, %to, "search failed: {err}");

    if !grid.get(from) {
        return Path::empty();
    }

    let r = options.retry_radius;
    let window = (-r..=r)
        .flat_map(|dx| (-r..=r).map(move |dy| (dx, dy)))
        .filter(|&d| d != (0, 0))
        .map(|(dx, dy)| from.offset(dx, dy));

    for candidate in window {
        if grid.get(candidate) {
            continue;
        }
        if let Ok(path) = pathfinder.search(grid, candidate, to) {
            debug!(%from, escape = %candidate, %to, "start cell blocked; path found from neighbour");
            return path;
        }
    }

    debug!(%from, %to, radius = r, "start cell blocked and no neighbour reaches the goal");
    Path::empty()
}
