use thiserror::Error;

/// Why a single flow-log line was rejected. Never fatal to a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("line has insufficient fields: {found}, minimum required: {required}")]
    InsufficientFields { found: usize, required: usize },

    #[error("unsupported flow log version '{found}', only version 2 is supported")]
    UnsupportedVersion { found: String },

    #[error("invalid destination port '{value}'")]
    InvalidPort { value: String },

    #[error("destination port {port} out of range 0-65535")]
    PortOutOfRange { port: i64 },

    #[error("unsupported protocol '{token}'")]
    UnsupportedProtocol { token: String },
}
