//! `mob-grid`: discretized space services for mob AI.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`grid`]       | `OccupancyGrid`: blocked/free cells, world ↔ cell mapping  |
//! | [`visibility`] | `can_see`: supercover line-of-sight                        |
//! | [`path`]       | `Pathfinder` trait, `AStar`, `Path`, `find_path`           |
//! | [`collision`]  | `MoveResolver` trait, `SlideResolver`                      |
//! | [`error`]      | `GridError`, `GridResult<T>`                               |
//!
//! The grid is written only while a level loads.  Every query here takes
//! `&OccupancyGrid`, so any number of agents can share it during play.

pub mod collision;
pub mod error;
pub mod grid;
pub mod path;
pub mod visibility;


pub use collision::{MoveResolver, SlideResolver};
pub use error::{GridError, GridResult};
pub use grid::OccupancyGrid;
pub use path::{AStar, Path, PathOptions, Pathfinder, find_path};
pub use visibility::can_see;
