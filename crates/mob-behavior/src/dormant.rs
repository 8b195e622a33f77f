//! The floor of every behavior stack.

use mob_agent::Mob;

use crate::{MobState, Searching, StateKind, Transition, World};

/// A mob that has not started doing anything yet.  The first examination
/// hands control to [`Searching`] with the mob's authored search pattern.
#[derive(Clone, Debug, Default)]
pub struct Dormant;

impl MobState for Dormant {
    fn kind(&self) -> StateKind {
        StateKind::Dormant
    }

    fn examine_world(&mut self, mob: &mut dyn Mob, _world: &World<'_>) -> Transition {
        Transition::Push(Searching::new(mob.search_pattern().to_vec()).into())
    }
}
