//! Error types for line-comparer operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LineComparerError>;

#[derive(Error, Debug)]
pub enum LineComparerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl LineComparerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
