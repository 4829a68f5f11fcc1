use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 text")]
    Encoding { path: PathBuf },
}

impl QaError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        QaError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, QaError>;
