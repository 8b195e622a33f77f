//! Plain data row types written by output backends.

use mob_agent::FrameSet;
use mob_behavior::StateKind;

/// One mob's position and behavior at a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobSnapshotRow {
    pub mob_id:  u32,
    pub frame:   u64,
    pub x:       f32,
    pub y:       f32,
    pub state:   StateKind,
    pub frames:  FrameSet,
    pub dead:    bool,
}

/// A change of active behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRow {
    pub frame:  u64,
    pub mob_id: u32,
    pub from:   StateKind,
    pub to:     StateKind,
}

/// One node of a mob's published path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRow {
    pub frame:  u64,
    pub mob_id: u32,
    /// Position of this node along the path, from 0.
    pub step:   u32,
    pub cell_x: i32,
    pub cell_y: i32,
}
