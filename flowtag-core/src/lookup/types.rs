use std::fmt;

/// Tag reported for records with no lookup entry.
pub const UNTAGGED: &str = "Untagged";

/// Join key between lookup entries and parsed flow records.
///
/// Ordering is by port, then protocol name, which is also the report order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagKey {
    pub port: u16,
    /// canonical lowercase name
    pub protocol: String,
}

impl TagKey {
    pub fn new(port: u16, protocol: impl Into<String>) -> Self {
        Self {
            port,
            protocol: protocol.into(),
        }
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.port, self.protocol)
    }
}
