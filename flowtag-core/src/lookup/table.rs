use crate::conf::ConfigError;
use crate::lookup::types::{TagKey, UNTAGGED};
use crate::protocol::ProtocolTable;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

#[derive(Deserialize)]
struct LookupRow {
    dstport: String,
    protocol: String,
    tag: String,
}

/// Read-only (port, protocol) → tag index.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: HashMap<TagKey, String>,
}

impl LookupTable {
    /// Load the lookup CSV at `path`. Protocol tokens are normalized through
    /// `protocols`, so it must be fully built first.
    pub fn load(path: &Path, protocols: &ProtocolTable) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::LookupNotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::ReadLookup {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let table = Self::from_csv(file, path, protocols)?;

        tracing::info!(
            path = %path.display(),
            entries = table.len(),
            tags = table.distinct_tags(),
            "loaded lookup table"
        );

        Ok(table)
    }

    pub fn from_csv<R: Read>(
        reader: R,
        origin: &Path,
        protocols: &ProtocolTable,
    ) -> Result<Self, ConfigError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut entries = HashMap::new();

        for (idx, result) in rdr.deserialize::<LookupRow>().enumerate() {
            // header is line 1
            let line = idx as u64 + 2;
            let row = result.map_err(|source| ConfigError::LookupRecord {
                path: origin.to_path_buf(),
                line,
                source,
            })?;

            let port = row
                .dstport
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidLookupPort {
                    path: origin.to_path_buf(),
                    line,
                    value: row.dstport.clone(),
                })?;

            if row.tag.is_empty() {
                return Err(ConfigError::EmptyTag {
                    path: origin.to_path_buf(),
                    line,
                });
            }

            let key = TagKey::new(port, protocols.resolve(&row.protocol));

            // Later rows win.
            if let Some(previous) = entries.insert(key.clone(), row.tag) {
                tracing::debug!(%key, line, previous = %previous, "lookup entry overridden");
            }
        }

        Ok(Self { entries })
    }

    pub fn classify(&self, key: &TagKey) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or(UNTAGGED)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn distinct_tags(&self) -> usize {
        self.entries.values().collect::<HashSet<_>>().len()
    }
}
