use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config file
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Lookup table
    #[error("lookup file not found: {path}")]
    LookupNotFound { path: PathBuf },

    #[error("failed to read lookup file {path}: {source}")]
    ReadLookup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid data in lookup file {path} at line {line}: {source}")]
    LookupRecord {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("invalid data in lookup file {path} at line {line}: invalid destination port '{value}'")]
    InvalidLookupPort {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("invalid data in lookup file {path} at line {line}: tag must not be empty")]
    EmptyTag { path: PathBuf, line: u64 },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
