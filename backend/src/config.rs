//! Dashboard configuration file and environment variable handling.
//!
//! Configuration is read from a TOML file (see [`DashboardConfig::from_file`])
//! and then overridden by environment variables.
//!
//! ```toml
//! [store]
//! type = "http"
//! base_url = "http://localhost:3001/api/analytics"
//! timeout_secs = 10
//!
//! [aggregation]
//! interval_minutes = 60
//! top_n = 10
//! utc_offset_minutes = 0
//! direction = "descending"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::routes::ranking::RankDirection;
use crate::services::error::{AnalyticsError, AnalyticsResult};
use crate::services::trends::{MAX_INTERVAL_MINUTES, MIN_INTERVAL_MINUTES};
use crate::store::StoreType;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("No dashboard.toml found in standard locations")]
    NotFound,

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub aggregation: AggregationSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Where scan data is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(rename = "type", default)]
    pub store_type: StoreType,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Overrides `{base_url}/all`.
    #[serde(default)]
    pub events_url: Option<String>,
    /// Overrides `{base_url}/summary`.
    #[serde(default)]
    pub summary_url: Option<String>,
    /// Overrides `{base_url}/scans-by-painting`.
    #[serde(default)]
    pub scans_by_painting_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Default parameters for the aggregation services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationSettings {
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub direction: RankDirection,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_base_url() -> String {
    "http://localhost:3001/api/analytics".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_interval_minutes() -> u32 {
    60
}

fn default_top_n() -> usize {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_type: StoreType::default(),
            base_url: default_base_url(),
            events_url: None,
            summary_url: None,
            scans_by_painting_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            interval_minutes: default_interval_minutes(),
            top_n: default_top_n(),
            utc_offset_minutes: 0,
            direction: RankDirection::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl StoreSettings {
    fn join(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn events_endpoint(&self) -> String {
        self.events_url.clone().unwrap_or_else(|| self.join("all"))
    }

    pub fn summary_endpoint(&self) -> String {
        self.summary_url.clone().unwrap_or_else(|| self.join("summary"))
    }

    pub fn scans_by_painting_endpoint(&self) -> String {
        self.scans_by_painting_url
            .clone()
            .unwrap_or_else(|| self.join("scans-by-painting"))
    }
}

impl AggregationSettings {
    /// Reject intervals outside one minute to one day and offsets of a day or more.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !(MIN_INTERVAL_MINUTES..=MAX_INTERVAL_MINUTES).contains(&self.interval_minutes) {
            return Err(AnalyticsError::InvalidInterval(self.interval_minutes));
        }
        if self.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return Err(AnalyticsError::InvalidOffset(self.utc_offset_minutes));
        }
        Ok(())
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "server.host".to_string(),
                value: self.host.clone(),
            })
    }
}

fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Defaults overridden by environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides.
    ///
    /// # Environment Variables
    /// - `STORE_TYPE`: `http` | `local`
    /// - `ANALYTICS_BASE_URL`: base URL of the analytics API
    /// - `ANALYTICS_EVENTS_URL`, `ANALYTICS_SUMMARY_URL`,
    ///   `ANALYTICS_SCANS_BY_PAINTING_URL`: per-endpoint overrides
    /// - `ANALYTICS_TIMEOUT_SECS`: request timeout
    /// - `BUCKET_INTERVAL_MINUTES`, `TOP_N`, `UTC_OFFSET_MINUTES`
    /// - `HOST`, `PORT`
    ///
    /// # Errors
    /// Returns an error if a numeric or enum variable cannot be parsed.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(value) = env::var("STORE_TYPE") {
            self.store.store_type =
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "STORE_TYPE".to_string(),
                    value,
                })?;
        }
        if let Ok(value) = env::var("ANALYTICS_BASE_URL") {
            self.store.base_url = value;
        }
        if let Ok(value) = env::var("ANALYTICS_EVENTS_URL") {
            self.store.events_url = Some(value);
        }
        if let Ok(value) = env::var("ANALYTICS_SUMMARY_URL") {
            self.store.summary_url = Some(value);
        }
        if let Ok(value) = env::var("ANALYTICS_SCANS_BY_PAINTING_URL") {
            self.store.scans_by_painting_url = Some(value);
        }
        if let Some(value) = env_parse("ANALYTICS_TIMEOUT_SECS")? {
            self.store.timeout_secs = value;
        }
        if let Some(value) = env_parse("BUCKET_INTERVAL_MINUTES")? {
            self.aggregation.interval_minutes = value;
        }
        if let Some(value) = env_parse("TOP_N")? {
            self.aggregation.top_n = value;
        }
        if let Some(value) = env_parse("UTC_OFFSET_MINUTES")? {
            self.aggregation.utc_offset_minutes = value;
        }
        if let Ok(value) = env::var("HOST") {
            self.server.host = value;
        }
        if let Some(value) = env_parse("PORT")? {
            self.server.port = value;
        }
        Ok(self)
    }

    /// Configuration for the server binary.
    ///
    /// Reads the file named by `DASHBOARD_CONFIG` if set, otherwise the default
    /// locations, falling back to built-in defaults; then applies env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var("DASHBOARD_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => match Self::from_default_location() {
                Ok(config) => config,
                Err(ConfigError::NotFound) => Self::default(),
                Err(e) => return Err(e),
            },
        };
        base.with_env_overrides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.store.store_type, StoreType::Http);
        assert_eq!(config.store.timeout_secs, 10);
        assert_eq!(config.aggregation.interval_minutes, 60);
        assert_eq!(config.aggregation.top_n, 10);
        assert_eq!(config.aggregation.direction, RankDirection::Descending);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_parse_full_toml() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [store]
            type = "local"
            base_url = "http://backend.test/api/analytics"
            scans_by_painting_url = "http://other.test/api/analytics/scans-by-painting"
            timeout_secs = 3

            [aggregation]
            interval_minutes = 15
            top_n = 5
            utc_offset_minutes = -300
            direction = "ascending"

            [server]
            host = "127.0.0.1"
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.store.store_type, StoreType::Local);
        assert_eq!(config.store.timeout_secs, 3);
        assert_eq!(
            config.store.events_endpoint(),
            "http://backend.test/api/analytics/all"
        );
        assert_eq!(
            config.store.scans_by_painting_endpoint(),
            "http://other.test/api/analytics/scans-by-painting"
        );
        assert_eq!(config.aggregation.interval_minutes, 15);
        assert_eq!(config.aggregation.utc_offset_minutes, -300);
        assert_eq!(config.aggregation.direction, RankDirection::Ascending);
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:9000".parse().unwrap()
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DashboardConfig::from_toml_str("[aggregation]\ntop_n = 3\n").unwrap();
        assert_eq!(config.aggregation.top_n, 3);
        assert_eq!(config.aggregation.interval_minutes, 60);
        assert_eq!(config.store, StoreSettings::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = DashboardConfig::from_toml_str("[store\ntype = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 7070").unwrap();

        let config = DashboardConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 7070);
    }

    #[test]
    fn test_from_missing_file() {
        let result = DashboardConfig::from_file("/definitely/not/here/dashboard.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_validate_interval_bounds() {
        let mut settings = AggregationSettings::default();
        assert!(settings.validate().is_ok());

        settings.interval_minutes = 0;
        assert!(matches!(
            settings.validate(),
            Err(AnalyticsError::InvalidInterval(0))
        ));

        settings.interval_minutes = 1440;
        assert!(settings.validate().is_ok());

        settings.interval_minutes = 1441;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_offset_bounds() {
        let settings = AggregationSettings {
            utc_offset_minutes: 1440,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(AnalyticsError::InvalidOffset(1440))
        ));

        for extreme in [i32::MIN, i32::MAX] {
            let settings = AggregationSettings {
                utc_offset_minutes: extreme,
                ..Default::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(AnalyticsError::InvalidOffset(m)) if m == extreme
            ));
        }
    }

    #[test]
    fn test_bad_host() {
        let server = ServerSettings {
            host: "not a host".to_string(),
            port: 80,
        };
        assert!(server.socket_addr().is_err());
    }
}
