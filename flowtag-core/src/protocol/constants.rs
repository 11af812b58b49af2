/// IANA protocol number → canonical name.
pub const BUILTIN_PROTOCOLS: &[(&str, &str)] = &[("6", "tcp"), ("17", "udp"), ("1", "icmp")];
