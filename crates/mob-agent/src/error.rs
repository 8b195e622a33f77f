use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no mob kind {0:?} is registered")]
    UnknownKind(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
