//! Station display name to telegraph code lookup.
//!
//! The table uses the 12306 `station_name.js` record format:
//! `@<abbr>|<name>|<code>|<pinyin>|<short>|<index>...`. A downloaded
//! `station_name.js` can be loaded as is; the `var station_names =`
//! wrapper and extra trailing fields are ignored.

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;

const BUILTIN: &str = include_str!("stations.txt");

/// Anything that can turn a station display name into its telegraph code.
pub trait StationLookup {
    fn code(&self, name: &str) -> Option<&str>;
}

/// Read-only station table, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct StationTable {
    codes: HashMap<String, String>,
}

impl StationTable {
    /// Parse station records. Malformed records are skipped and the first
    /// occurrence of a name wins.
    pub fn parse(source: &str) -> Self {
        let mut codes = HashMap::new();

        for record in source.split('@') {
            let mut fields = record.trim().split('|');
            let _abbr = fields.next();
            let (name, code) = match (fields.next(), fields.next()) {
                (Some(name), Some(code)) => (name.trim(), code.trim()),
                _ => continue,
            };
            if name.is_empty() || code.is_empty() {
                continue;
            }
            codes
                .entry(name.to_string())
                .or_insert_with(|| code.to_string());
        }

        Self { codes }
    }

    /// The table bundled with the binary.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|source| ConfigError::StationsFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::parse(&source))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl StationLookup for StationTable {
    fn code(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }
}
