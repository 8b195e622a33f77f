//! `mob-level`: the level that owns the grid, the player, and the mobs.
//!
//! # Frame loop
//!
//! ```text
//! Level::update(elapsed, observer):
//!   ① clock     : advance one frame
//!   ② per mob   : entity.update(elapsed)            (animation)
//!                  behavior.update(elapsed)          (top state only)
//!                  behavior.examine_world(world)     (may push / pop)
//!   ③ debug     : publish each live mob's current path
//!   ④ snapshot  : observer.on_tick_end
//! ```
//!
//! Dead mobs keep animating but skip ② and ③.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mob_agent::SpawnRegistry;
//! use mob_core::AiConfig;
//! use mob_grid::OccupancyGrid;
//! use mob_level::{LevelBuilder, NoopObserver, load_markers_path};
//!
//! let grid = OccupancyGrid::from_ascii(&rows)?;
//! let markers = load_markers_path(Path::new("arena.csv"))?;
//! let mut level = LevelBuilder::standard(grid, SpawnRegistry::with_presets(), AiConfig::default())
//!     .markers(markers)
//!     .build()?;
//! level.update(Duration::from_millis(16), &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod level;
pub mod observer;
pub mod spawn;

#[cfg(test)]
mod tests;

pub use builder::LevelBuilder;
pub use error::{LevelError, LevelResult};
pub use level::{Level, MobSlot};
pub use observer::{LevelObserver, NoopObserver};
pub use spawn::{SpawnMarker, load_markers_path, load_markers_reader};
