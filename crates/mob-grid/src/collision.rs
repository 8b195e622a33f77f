//! The move primitive: clip a requested displacement against blocked cells.
//!
//! Behavior states only produce a direction; committing the move (and
//! deciding how walls deflect it) is the resolver's job.

use mob_core::{Cell, Rect, Vec2};

use crate::OccupancyGrid;

/// Gap left between a box and the wall it was clipped against, so the next
/// frame's overlap test does not see the two as touching.
const SKIN: f32 = 1e-4;

/// Turns a requested displacement into the displacement actually allowed.
pub trait MoveResolver {
    /// `bounds` is the mover's current box, `delta` the requested move.
    fn resolve(&self, grid: &OccupancyGrid, bounds: Rect, delta: Vec2) -> Vec2;
}

/// Axis-separated slide: resolve x, then y against the x-moved box, so a
/// diagonal push into a wall keeps its tangential component.
///
/// Each axis is swept: every cell between the current box and the requested
/// one is tested, so a step longer than a cell stops at the first wall
/// instead of hopping over it.
///
/// A blocked cell the box already overlaps only stops movement that would
/// push the box further into it.  A mob spawned or pushed into a wall tile
/// can always walk back out the way its centre points, but cannot cross it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlideResolver;

impl MoveResolver for SlideResolver {
    fn resolve(&self, grid: &OccupancyGrid, bounds: Rect, delta: Vec2) -> Vec2 {
        let dx = clip_axis(grid, bounds, delta.x, Axis::X);
        let moved = bounds.translate(Vec2::new(dx, 0.0));
        let dy = clip_axis(grid, moved, delta.y, Axis::Y);
        Vec2::new(dx, dy)
    }
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn clip_axis(grid: &OccupancyGrid, bounds: Rect, d: f32, axis: Axis) -> f32 {
    if d == 0.0 {
        return 0.0;
    }
    let step = match axis {
        Axis::X => Vec2::new(d, 0.0),
        Axis::Y => Vec2::new(0.0, d),
    };
    let already: Vec<Cell> = grid.cells_overlapping(bounds).collect();
    let swept = sweep(grid, bounds, bounds.translate(step));
    let mut allowed = d;

    for cell in grid.cells_overlapping(swept) {
        if !grid.get(cell) {
            continue;
        }
        let wall = grid.cell_bounds(cell);
        if already.contains(&cell) {
            let (mine, theirs) = match axis {
                Axis::X => (bounds.center().x, wall.center().x),
                Axis::Y => (bounds.center().y, wall.center().y),
            };
            let deeper = if d > 0.0 { mine < theirs } else { mine > theirs };
            if deeper {
                allowed = 0.0;
            }
            continue;
        }
        let (lead, near) = match (axis, d > 0.0) {
            (Axis::X, true)  => (bounds.max.x, wall.min.x),
            (Axis::X, false) => (bounds.min.x, wall.max.x),
            (Axis::Y, true)  => (bounds.max.y, wall.min.y),
            (Axis::Y, false) => (bounds.min.y, wall.max.y),
        };
        allowed = if d > 0.0 {
            allowed.min((near - lead - SKIN).max(0.0))
        } else {
            allowed.max((near - lead + SKIN).min(0.0))
        };
    }
    allowed
}

/// The box covering both `from` and `to`, cut off one cell past the grid
/// edge; everything beyond reads as blocked, so the first ring is enough.
fn sweep(grid: &OccupancyGrid, from: Rect, to: Rect) -> Rect {
    let cs = grid.cell_size();
    let lo = Vec2::new(-cs, -cs);
    let hi = Vec2::new(
        (grid.width() as f32 + 1.0) * cs,
        (grid.height() as f32 + 1.0) * cs,
    );
    let clamp = |v: Vec2| Vec2::new(v.x.clamp(lo.x, hi.x), v.y.clamp(lo.y, hi.y));
    Rect::new(
        clamp(Vec2::new(from.min.x.min(to.min.x), from.min.y.min(to.min.y))),
        clamp(Vec2::new(from.max.x.max(to.max.x), from.max.y.max(to.max.y))),
    )
}
