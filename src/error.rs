use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid invocation: {0}")]
    InvalidInvocation(String),
    #[error("status fetch failed: {0}")]
    StatusFetch(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
