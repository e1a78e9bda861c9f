use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task description is empty")]
    EmptyDescription,

    #[error("no task ids left")]
    IdsExhausted,
}

pub type Result<T> = std::result::Result<T, TodoError>;
