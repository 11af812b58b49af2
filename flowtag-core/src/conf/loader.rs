use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use std::fs;
use std::path::Path;

pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: AnalyzerConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    tracing::debug!(
        path = %path.display(),
        max_input_bytes = cfg.max_input_bytes,
        protocol_mappings = %cfg.protocol_mappings.display(),
        "loaded analyzer config"
    );

    Ok(cfg)
}

/// Load the config file when one was given, defaults otherwise.
pub fn resolve_config(path: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(AnalyzerConfig::default()),
    }
}
