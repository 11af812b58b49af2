pub const MIN_FIELDS: usize = 14;
pub const SUPPORTED_VERSION: &str = "2";

pub const VERSION_FIELD: usize = 0;
pub const DSTPORT_FIELD: usize = 6;
pub const PROTOCOL_FIELD: usize = 7;
