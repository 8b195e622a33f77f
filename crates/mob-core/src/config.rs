//! Tunables for perception, pathing, and path following.

use crate::{CoreError, CoreResult};

/// AI configuration shared by the grid, behavior, and level crates.
///
/// Typically built with `AiConfig::default()` or loaded from a JSON file by
/// the application (with the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// A cached path older than this many frames is recomputed on the next
    /// examination.  Bounds per-frame pathfinding cost.
    pub max_path_age: u32,

    /// World distance under which a path node counts as reached.
    pub arrive_distance: f32,

    /// Half extent used when quantizing agent and player positions.
    pub half_extent: f32,

    /// Chebyshev radius of the escape-hatch window searched when an agent's
    /// own cell is blocked.  4 gives a 9×9 window.
    pub retry_radius: i32,

    /// 8-connected search when `true`, 4-connected otherwise.
    pub diagonal_moves: bool,

    /// World units per grid cell.
    pub cell_size: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            max_path_age:    2,
            arrive_distance: 2.0,
            half_extent:     0.5,
            retry_radius:    4,
            diagonal_moves:  true,
            cell_size:       1.0,
        }
    }
}

impl AiConfig {
    /// Reject values that would make quantization or path following
    /// meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.cell_size > 0.0) {
            return Err(CoreError::Config(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if !(self.half_extent >= 0.0) {
            return Err(CoreError::Config(format!(
                "half_extent must be non-negative, got {}",
                self.half_extent
            )));
        }
        if !(self.arrive_distance > 0.0) {
            return Err(CoreError::Config(format!(
                "arrive_distance must be positive, got {}",
                self.arrive_distance
            )));
        }
        if self.retry_radius < 0 {
            return Err(CoreError::Config(format!(
                "retry_radius must be non-negative, got {}",
                self.retry_radius
            )));
        }
        Ok(())
    }
}
