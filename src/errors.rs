use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type that captures storage, aggregation, and configuration failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("expense store `{}` is corrupt: {source}", path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read expense store `{}`: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write expense store `{}`: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid date `{date}`, expected YYYY-MM-DD: {source}")]
    InvalidDateFormat {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExpenseError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExpenseError::StorageWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
