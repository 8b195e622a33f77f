//! The result of examining the world.

use crate::BehaviorState;

/// What the behavior stack should do after the top state examined the world.
#[derive(Clone, Debug)]
pub enum Transition {
    /// Keep the current state on top.
    Stay,
    /// Suspend the current state under a new one.
    Push(BehaviorState),
    /// The current state is done; resume the one beneath it.
    Pop,
}
