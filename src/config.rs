//! Runtime configuration.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::stations::StationTable;

/// 12306 remaining-ticket query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn/otn/lcxxcx/query";

/// Overrides the query endpoint.
pub const BASE_URL_ENV: &str = "TICKETS_QUERY_URL";
/// Path to an alternate station table.
pub const STATIONS_ENV: &str = "TICKETS_STATIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// `None` uses the bundled table.
    pub stations_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            stations_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty()) {
            config = config.with_base_url(url);
        }
        if let Some(path) = std::env::var_os(STATIONS_ENV).filter(|v| !v.is_empty()) {
            config = config.with_stations_file(path);
        }
        config
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_stations_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stations_file = Some(path.into());
        self
    }

    pub fn load_stations(&self) -> Result<StationTable, ConfigError> {
        match &self.stations_file {
            Some(path) => StationTable::from_file(path),
            None => Ok(StationTable::builtin()),
        }
    }
}
