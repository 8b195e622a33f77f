//! The `MobState` trait and the closed set of behavior states.

use std::fmt;
use std::time::Duration;

use mob_agent::Mob;
use mob_grid::Path;

use crate::{Dormant, Hunting, Searching, Transition, World};

/// One layer of a mob's behavior.
///
/// # Required methods
///
/// Only [`kind`][Self::kind] and [`examine_world`][Self::examine_world] are
/// required.  The remaining hooks default to no-ops.
pub trait MobState {
    fn kind(&self) -> StateKind;

    /// Look at the world, act on it, and say what the stack should do next.
    fn examine_world(&mut self, mob: &mut dyn Mob, world: &World<'_>) -> Transition;

    /// Per-frame timekeeping, called before [`examine_world`][Self::examine_world].
    fn update(&mut self, _mob: &mut dyn Mob, _elapsed: Duration) {}

    /// Called when this state becomes the top of the stack.
    fn enter(&mut self, _mob: &mut dyn Mob) {}

    /// Called when this state stops being the top of the stack.
    fn exit(&mut self, _mob: &mut dyn Mob) {}

    /// The path this state is currently following, for debug overlays.
    fn path(&self) -> Option<&Path> {
        None
    }
}

// ── StateKind ─────────────────────────────────────────────────────────────────

/// Discriminant of a [`BehaviorState`], for logging and output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    Dormant,
    Searching,
    Hunting,
}

impl StateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StateKind::Dormant   => "dormant",
            StateKind::Searching => "searching",
            StateKind::Hunting   => "hunting",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// Every state a behavior stack can hold.
#[derive(Clone, Debug)]
pub enum BehaviorState {
    Dormant(Dormant),
    Searching(Searching),
    Hunting(Hunting),
}

impl BehaviorState {
    pub fn as_searching(&self) -> Option<&Searching> {
        match self {
            BehaviorState::Searching(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_hunting(&self) -> Option<&Hunting> {
        match self {
            BehaviorState::Hunting(h) => Some(h),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn MobState {
        match self {
            BehaviorState::Dormant(s)   => s,
            BehaviorState::Searching(s) => s,
            BehaviorState::Hunting(s)   => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn MobState {
        match self {
            BehaviorState::Dormant(s)   => s,
            BehaviorState::Searching(s) => s,
            BehaviorState::Hunting(s)   => s,
        }
    }
}

impl MobState for BehaviorState {
    fn kind(&self) -> StateKind {
        self.inner().kind()
    }

    fn examine_world(&mut self, mob: &mut dyn Mob, world: &World<'_>) -> Transition {
        self.inner_mut().examine_world(mob, world)
    }

    fn update(&mut self, mob: &mut dyn Mob, elapsed: Duration) {
        self.inner_mut().update(mob, elapsed);
    }

    fn enter(&mut self, mob: &mut dyn Mob) {
        self.inner_mut().enter(mob);
    }

    fn exit(&mut self, mob: &mut dyn Mob) {
        self.inner_mut().exit(mob);
    }

    fn path(&self) -> Option<&Path> {
        self.inner().path()
    }
}

impl From<Dormant> for BehaviorState {
    fn from(s: Dormant) -> Self {
        BehaviorState::Dormant(s)
    }
}

impl From<Searching> for BehaviorState {
    fn from(s: Searching) -> Self {
        BehaviorState::Searching(s)
    }
}

impl From<Hunting> for BehaviorState {
    fn from(s: Hunting) -> Self {
        BehaviorState::Hunting(s)
    }
}
