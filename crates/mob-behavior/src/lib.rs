//! `mob-behavior`: the per-mob behavior state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`context`]    | `World<'a>`: read-only frame snapshot handed to every state   |
//! | [`state`]      | `MobState` trait, `BehaviorState` variant set, `StateKind`    |
//! | [`transition`] | `Transition`: `Stay`, `Push`, `Pop`                           |
//! | [`dormant`]    | `Dormant`: stack floor, hands over to `Searching`             |
//! | [`search`]     | `Searching`: cyclic patrol over the mob's search pattern      |
//! | [`hunt`]       | `Hunting`: pursuit until the mob gets bored                   |
//! | [`follow`]     | `PathFollower`: cached path, staleness, node skipping         |
//! | [`movement`]   | `move_mob`: the move primitive                                |
//! | [`stack`]      | `BehaviorStack`: owns the states, applies transitions         |
//!
//! # Frame protocol
//!
//! Once per frame the level calls [`BehaviorStack::update`] with the elapsed
//! time and then [`BehaviorStack::examine_world`] with a fresh [`World`].
//! Only the top state sees either call.  States never move a mob directly:
//! they produce a displacement and hand it to [`move_mob`], which clips it
//! against the grid.

pub mod context;
pub mod dormant;
pub mod follow;
pub mod hunt;
pub mod movement;
pub mod search;
pub mod stack;
pub mod state;
pub mod transition;


pub use context::World;
pub use dormant::Dormant;
pub use follow::{PathFollower, Step};
pub use hunt::Hunting;
pub use movement::move_mob;
pub use search::Searching;
pub use stack::BehaviorStack;
pub use state::{BehaviorState, MobState, StateKind};
pub use transition::Transition;
