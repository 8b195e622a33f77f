//! Level observer trait for debug overlays and data collection.

use mob_behavior::StateKind;
use mob_core::{Frame, MobId, Vec2};
use mob_grid::Path;

use crate::MobSlot;

/// Callbacks invoked by [`Level::update`][crate::Level::update].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: transition logger
///
/// ```rust,ignore
/// struct Transitions;
///
/// impl LevelObserver for Transitions {
///     fn on_state_change(&mut self, frame: Frame, mob: MobId, from: StateKind, to: StateKind) {
///         println!("{frame}: {mob} {from} -> {to}");
///     }
/// }
/// ```
pub trait LevelObserver {
    /// Called at the start of each frame, before any mob is updated.
    fn on_tick_start(&mut self, _frame: Frame) {}

    /// Called when a mob's active behavior changes.
    fn on_state_change(&mut self, _frame: Frame, _mob: MobId, _from: StateKind, _to: StateKind) {}

    /// Called once per live mob per frame with the path it is following.
    /// Read-only export for debug rendering.
    fn on_path(&mut self, _frame: Frame, _mob: MobId, _path: &Path) {}

    /// Called at the end of each frame with the player position and every mob.
    fn on_tick_end(&mut self, _frame: Frame, _player: Vec2, _mobs: &[MobSlot]) {}
}

/// A [`LevelObserver`] that does nothing.
pub struct NoopObserver;

impl LevelObserver for NoopObserver {}
