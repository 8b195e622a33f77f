//! The move primitive.

use mob_agent::Mob;
use mob_core::Vec2;

use crate::World;

/// Move `mob` by `delta`, clipped by the world's [`MoveResolver`], and
/// commit the result.  Returns the displacement actually applied.
///
/// [`MoveResolver`]: mob_grid::MoveResolver
pub fn move_mob(mob: &mut dyn Mob, delta: Vec2, world: &World<'_>) -> Vec2 {
    let applied = world.resolver.resolve(world.grid, mob.bounds(), delta);
    mob.move_to(mob.pos() + applied);
    applied
}
