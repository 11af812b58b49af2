use crate::flowlog::constants::{
    DSTPORT_FIELD, MIN_FIELDS, PROTOCOL_FIELD, SUPPORTED_VERSION, VERSION_FIELD,
};
use crate::flowlog::error::RecordError;
use crate::lookup::TagKey;
use crate::protocol::ProtocolTable;

/// Validate one raw flow-log line and extract its (port, protocol) key.
pub fn parse_record(line: &str, protocols: &ProtocolTable) -> Result<TagKey, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < MIN_FIELDS {
        return Err(RecordError::InsufficientFields {
            found: fields.len(),
            required: MIN_FIELDS,
        });
    }

    let version = fields[VERSION_FIELD];
    if version != SUPPORTED_VERSION {
        return Err(RecordError::UnsupportedVersion {
            found: version.to_string(),
        });
    }

    let port = parse_port(fields[DSTPORT_FIELD])?;

    let token = fields[PROTOCOL_FIELD];
    if !is_protocol_number(token) && !ProtocolTable::is_builtin_name(token) {
        return Err(RecordError::UnsupportedProtocol {
            token: token.to_string(),
        });
    }

    Ok(TagKey::new(port, protocols.resolve(token)))
}

fn parse_port(raw: &str) -> Result<u16, RecordError> {
    let value = raw.parse::<i64>().map_err(|_| RecordError::InvalidPort {
        value: raw.to_string(),
    })?;

    u16::try_from(value).map_err(|_| RecordError::PortOutOfRange { port: value })
}

fn is_protocol_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
