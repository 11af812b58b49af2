use crate::conf::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("flow log file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error(
        "flow log file {path} exceeds maximum allowed size of {limit} bytes (current size: {size} bytes)"
    )]
    InputTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("failed to read flow log file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing to output file {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::InputNotFound { path: path.into() };
        }
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }
}
