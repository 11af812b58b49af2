pub const COMMON_PORTS: &[u16] = &[
    20, 21, 22, 23, 25, 53, 80, 110, 143, 443, 465, 587, 993, 995, 3306, 3389, 5432, 8080, 8443,
];

/// Ephemeral range sampled alongside the common ports (upper bound exclusive).
pub const HIGH_PORTS: std::ops::Range<u16> = 1024..65535;

/// Destination ports of generated records.
pub const DSTPORT_RANGE: std::ops::RangeInclusive<u16> = 1024..=65535;

pub const PROTOCOL_NUMBERS: &[&str] = &["6", "17", "1"];

pub const SERVICE_TAGS: &[&str] = &[
    "web",
    "email",
    "dns",
    "db",
    "ssh",
    "ftp",
    "telnet",
    "rdp",
    "vpn",
    "storage",
    "cache",
    "auth",
    "monitoring",
    "backup",
    "streaming",
    "gaming",
    "api",
    "proxy",
];

pub const ACCOUNT_ID: &str = "123456789012";
pub const ACTIONS: &[&str] = &["ACCEPT", "REJECT"];
pub const ENI_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub const PROGRESS_EVERY: u64 = 10_000;
