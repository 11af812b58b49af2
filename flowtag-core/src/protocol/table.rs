use crate::protocol::constants::BUILTIN_PROTOCOLS;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolMapError {
    #[error("line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: protocol number '{value}' is not numeric")]
    InvalidNumber { line: u64, value: String },

    #[error("line {line}: protocol name is empty")]
    EmptyName { line: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for ProtocolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolSource::Builtin => write!(f, "builtin"),
            ProtocolSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Deserialize)]
struct ProtocolRow {
    protocol_number: String,
    protocol_name: String,
}

/// Immutable token → canonical protocol name map.
#[derive(Debug, Clone)]
pub struct ProtocolTable {
    map: HashMap<String, String>,
    source: ProtocolSource,
}

impl ProtocolTable {
    pub fn builtin() -> Self {
        Self {
            map: BUILTIN_PROTOCOLS
                .iter()
                .map(|(number, name)| (number.to_string(), name.to_string()))
                .collect(),
            source: ProtocolSource::Builtin,
        }
    }

    /// Parse a `protocol_number,protocol_name` table. Each row is reachable by
    /// number and by name.
    pub fn from_csv<R: Read>(
        reader: R,
        origin: impl Into<PathBuf>,
    ) -> Result<Self, ProtocolMapError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut map = HashMap::new();

        for (idx, result) in rdr.deserialize::<ProtocolRow>().enumerate() {
            // header is line 1
            let line = idx as u64 + 2;
            let row = result.map_err(|source| ProtocolMapError::Record { line, source })?;

            let number = row.protocol_number;
            if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ProtocolMapError::InvalidNumber {
                    line,
                    value: number,
                });
            }

            let name = row.protocol_name.to_lowercase();
            if name.is_empty() {
                return Err(ProtocolMapError::EmptyName { line });
            }

            map.insert(number, name.clone());
            map.insert(name.clone(), name);
        }

        Ok(Self {
            map,
            source: ProtocolSource::File(origin.into()),
        })
    }

    /// Load the override table at `path`, degrading to the built-in map when
    /// the file is absent or unusable. Never fails.
    pub fn load(path: &Path) -> Self {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %path.display(),
                    "no protocol mapping file, using built-in mappings"
                );
                return Self::builtin();
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "error reading protocol file, using built-in mappings"
                );
                return Self::builtin();
            }
        };

        match Self::from_csv(file, path) {
            Ok(table) => {
                tracing::info!(
                    path = %path.display(),
                    entries = table.len(),
                    "loaded protocol mappings"
                );
                table
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "error reading protocol file, using built-in mappings"
                );
                Self::builtin()
            }
        }
    }

    /// Case-insensitive. Unknown tokens pass through lowercased.
    pub fn resolve(&self, token: &str) -> String {
        let key = token.to_lowercase();
        match self.map.get(&key) {
            Some(name) => name.clone(),
            None => key,
        }
    }

    /// Whether `token` names one of the built-in protocols, regardless of
    /// which table is active.
    pub fn is_builtin_name(token: &str) -> bool {
        BUILTIN_PROTOCOLS
            .iter()
            .any(|(_, name)| name.eq_ignore_ascii_case(token))
    }

    pub fn source(&self) -> &ProtocolSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for ProtocolTable {
    fn default() -> Self {
        Self::builtin()
    }
}
