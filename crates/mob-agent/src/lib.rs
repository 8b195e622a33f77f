//! `mob-agent`: the capability surface the AI drives, and a concrete mob.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`mob`]      | `Mob` trait (the facade), `FrameSet`                          |
//! | [`mobile`]   | `Mobile`: speed, detection radius, boredom, search pattern    |
//! | [`entity`]   | `MobEntity` (implements `Mob`), `Animation`                   |
//! | [`registry`] | `SpawnRegistry`: spawn-marker kind → `Mobile` constructor     |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                                |
//!
//! # Why a facade
//!
//! Behavior states only ever see `&mut dyn Mob`.  Anything that can report a
//! position and stats and accept a new position can be driven by the state
//! machine; rendering and sprite lookup stay on the other side of the trait.

pub mod entity;
pub mod error;
pub mod mob;
pub mod mobile;
pub mod registry;

#[cfg(test)]
mod tests;

pub use entity::{Animation, MobEntity};
pub use error::{AgentError, AgentResult};
pub use mob::{FrameSet, Mob};
pub use mobile::Mobile;
pub use registry::{MobMaker, SpawnRegistry};
