//! The per-mob behavior stack.

use std::time::Duration;

use mob_agent::Mob;
use mob_grid::Path;
use tracing::debug;

use crate::{BehaviorState, Dormant, MobState, StateKind, Transition, World};

/// A mob's active behaviors, top = in control.
///
/// The bottom entry is always the [`Dormant`] floor and is never popped;
/// attempting to is a logic error in the transition rules and panics.
#[derive(Clone, Debug)]
pub struct BehaviorStack {
    states: Vec<BehaviorState>,
}

impl Default for BehaviorStack {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorStack {
    /// A stack holding only the floor state.
    pub fn new() -> Self {
        Self { states: vec![Dormant.into()] }
    }

    pub fn top(&self) -> &BehaviorState {
        // Never empty: the floor cannot be popped.
        &self.states[self.states.len() - 1]
    }

    pub fn kind(&self) -> StateKind {
        self.top().kind()
    }

    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> &[BehaviorState] {
        &self.states
    }

    /// The path the top state is following, if it follows one.
    pub fn current_path(&self) -> Option<&Path> {
        self.top().path()
    }

    /// Forward elapsed time to the top state.
    pub fn update(&mut self, mob: &mut dyn Mob, elapsed: Duration) {
        self.top_mut().update(mob, elapsed);
    }

    /// Let the top state examine the world, then apply its transition.
    /// Returns the kind now on top.
    pub fn examine_world(&mut self, mob: &mut dyn Mob, world: &World<'_>) -> StateKind {
        let transition = self.top_mut().examine_world(mob, world);
        self.apply(mob, transition)
    }

    /// Apply `transition`, running `exit` on the state leaving the top and
    /// `enter` on the one arriving there.
    ///
    /// # Panics
    ///
    /// On [`Transition::Pop`] when only the floor state is left.
    pub fn apply(&mut self, mob: &mut dyn Mob, transition: Transition) -> StateKind {
        match transition {
            Transition::Stay => {}
            Transition::Push(mut next) => {
                let from = self.kind();
                self.top_mut().exit(mob);
                next.enter(mob);
                debug!(%from, to = %next.kind(), depth = self.states.len() + 1, "behavior push");
                self.states.push(next);
            }
            Transition::Pop => {
                assert!(self.states.len() > 1, "behavior stack underflow: the floor state cannot be popped");
                let mut done = self.pop_top();
                done.exit(mob);
                self.top_mut().enter(mob);
                debug!(from = %done.kind(), to = %self.kind(), depth = self.states.len(), "behavior pop");
            }
        }
        self.kind()
    }

    fn top_mut(&mut self) -> &mut BehaviorState {
        let last = self.states.len() - 1;
        &mut self.states[last]
    }

    fn pop_top(&mut self) -> BehaviorState {
        match self.states.pop() {
            Some(state) => state,
            None => unreachable!("stack length checked before popping"),
        }
    }
}
