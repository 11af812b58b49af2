mod constants;
pub mod error;
mod loader;
pub mod types;


pub use constants::*;
pub use error::ConfigError;
pub use loader::{load_config, resolve_config};
pub use types::AnalyzerConfig;
