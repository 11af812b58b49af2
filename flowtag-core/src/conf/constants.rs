/// 10 MiB
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// Looked up relative to the working directory.
pub const DEFAULT_PROTOCOL_MAPPINGS: &str = "protocol_mappings.csv";
