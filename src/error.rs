use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown quick range id `{0}`")]
    UnknownQuickRange(String),

    #[error("listener with id `{0}` is already registered")]
    DuplicateListener(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
