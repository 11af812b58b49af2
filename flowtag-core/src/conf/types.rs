use crate::conf::constants::{DEFAULT_MAX_INPUT_BYTES, DEFAULT_PROTOCOL_MAPPINGS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run-wide settings, built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Flow logs larger than this are rejected before any line is read.
    pub max_input_bytes: u64,

    /// Optional protocol override table. Missing file means built-in defaults.
    pub protocol_mappings: PathBuf,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            protocol_mappings: PathBuf::from(DEFAULT_PROTOCOL_MAPPINGS),
        }
    }
}

impl AnalyzerConfig {
    /// Apply command-line overrides on top of file/default values.
    pub fn with_overrides(
        mut self,
        max_input_bytes: Option<u64>,
        protocol_mappings: Option<PathBuf>,
    ) -> Self {
        if let Some(max) = max_input_bytes {
            self.max_input_bytes = max;
        }
        if let Some(path) = protocol_mappings {
            self.protocol_mappings = path;
        }
        self
    }
}
