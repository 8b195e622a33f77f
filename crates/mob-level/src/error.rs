use mob_agent::AgentError;
use mob_core::{CoreError, MobId};
use mob_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("spawn error: {0}")]
    Agent(#[from] AgentError),

    #[error("no mob {0} in this level")]
    UnknownMob(MobId),

    #[error("spawn marker parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LevelResult<T> = Result<T, LevelError>;
