//! Line-of-sight over the occupancy grid.
//!
//! Both endpoints are quantized to cells and the segment between the two
//! cell centres is walked as a strict supercover: every cell the segment
//! passes through is visited, and where the segment crosses a cell corner
//! exactly, both cells beside the corner are visited.  The visited set is a
//! property of the segment alone, so `can_see` is symmetric.

use mob_core::{Cell, Vec2};

use crate::OccupancyGrid;

/// `true` if no cell on the supercover line between `a` and `b` is blocked.
///
/// `half_a` and `half_b` are the half extents used to quantize each point
/// (see [`OccupancyGrid::cell_at`]).  Endpoint cells are tested too, so an
/// endpoint off the grid never sees anything.
pub fn can_see(grid: &OccupancyGrid, a: Vec2, b: Vec2, half_a: f32, half_b: f32) -> bool {
    let from = grid.cell_at(a, half_a);
    let to = grid.cell_at(b, half_b);
    if !grid.contains(from) || !grid.contains(to) {
        return false;
    }
    supercover(from, to, |cell| grid.is_free(cell))
}

/// Visit every cell on the supercover line from `from` to `to`, stopping as
/// soon as `visit` returns `false`.  Returns `false` iff a visit did.
pub(crate) fn supercover(from: Cell, to: Cell, mut visit: impl FnMut(Cell) -> bool) -> bool {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    let (nx, ny) = (dx.abs(), dy.abs());
    let sx = dx.signum() as i32;
    let sy = dy.signum() as i32;

    let mut cur = from;
    if !visit(cur) {
        return false;
    }

    let (mut ix, mut iy) = (0i64, 0i64);
    while ix < nx || iy < ny {
        // Sign tells which cell edge the segment crosses next; zero is an
        // exact corner crossing.
        let decision = (1 + 2 * ix) * ny - (1 + 2 * iy) * nx;
        if decision == 0 {
            if !visit(cur.offset(sx, 0)) || !visit(cur.offset(0, sy)) {
                return false;
            }
            cur = cur.offset(sx, sy);
            ix += 1;
            iy += 1;
        } else if decision < 0 {
            cur = cur.offset(sx, 0);
            ix += 1;
        } else {
            cur = cur.offset(0, sy);
            iy += 1;
        }
        if !visit(cur) {
            return false;
        }
    }
    true
}
