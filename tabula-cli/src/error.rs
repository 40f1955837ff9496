//! CLI error type.

use std::path::PathBuf;

use tabula::{ConfigError, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(std::io::Error),
    #[error("invalid table document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Table(#[from] TableError),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Table(err.into())
    }
}
