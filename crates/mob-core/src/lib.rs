//! `mob-core`: foundational types shared by every `mob-*` crate.
//!
//! This crate has no `mob-*` dependencies and only `thiserror` (plus optional
//! `serde`) from the outside world.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `MobId`                                                 |
//! | [`geo`]      | `Vec2` (world point / vector), `Rect`, `Cell`           |
//! | [`time`]     | `Frame`, `FrameClock`                                   |
//! | [`config`]   | `AiConfig`: pathing and perception tunables             |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::AiConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Cell, Rect, Vec2};
pub use ids::MobId;
pub use time::{Frame, FrameClock};
