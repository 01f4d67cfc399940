//! Service configuration.
//!
//! Values come from `~/.catalogscope/config.toml` (or an explicit path) and
//! fall back to [`ServiceConfig::default`] field by field.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// What the catalog resolver does with an entry whose identifier cannot be
/// split at its reference subject width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedEntryPolicy {
    /// Drop the entry and log a warning.
    #[default]
    Skip,
    /// Fail the whole request.
    Reject,
}

/// The `[logging]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Directory for the rolling log files; `~/.catalogscope/logs` when unset.
    pub dir: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn directory(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".catalogscope/logs"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    /// JSON catalog snapshot served by the snapshot provider.
    pub snapshot: Option<PathBuf>,
    pub default_limit: u32,
    /// Upper bound on `limit`; unbounded unless set.
    pub max_limit: Option<u32>,
    pub malformed_entries: MalformedEntryPolicy,
    pub logging: LoggingConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            snapshot: None,
            default_limit: DEFAULT_LIMIT,
            max_limit: None,
            malformed_entries: MalformedEntryPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".catalogscope/config.toml"))
    }

    /// Load from `path`, or from [`Self::default_path`] when it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(CatalogError::Config(
                "default_limit must be at least 1".to_string(),
            ));
        }
        if let Some(max_limit) = self.max_limit {
            if max_limit < self.default_limit {
                return Err(CatalogError::Config(format!(
                    "max_limit ({}) must not be below default_limit ({})",
                    max_limit, self.default_limit
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind.port(), DEFAULT_PORT);
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.max_limit, None);
        assert_eq!(config.malformed_entries, MalformedEntryPolicy::Skip);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServiceConfig::from_toml_str(
            r#"
            bind = "0.0.0.0:8080"
            malformed_entries = "reject"

            [logging]
            level = "catalogscope_core=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.malformed_entries, MalformedEntryPolicy::Reject);
        assert_eq!(config.default_limit, DEFAULT_LIMIT);
        assert_eq!(config.logging.level, "catalogscope_core=debug");
        assert!(config.logging.dir.is_none());
        assert!(config.snapshot.is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = ServiceConfig::from_toml_str("cache_ttl = 30");
        assert!(matches!(result, Err(CatalogError::Toml(_))));

        let result = ServiceConfig::from_toml_str("[logging]\nformat = \"json\"");
        assert!(matches!(result, Err(CatalogError::Toml(_))));
    }

    #[test]
    fn test_opt_in_limit_cap_must_cover_default() {
        let result = ServiceConfig::from_toml_str("default_limit = 50\nmax_limit = 20");
        assert!(matches!(result, Err(CatalogError::Config(_))));

        let config = ServiceConfig::from_toml_str("max_limit = 200").unwrap();
        assert_eq!(config.max_limit, Some(200));

        let result = ServiceConfig::from_toml_str("default_limit = 0");
        assert!(matches!(result, Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_log_directory() {
        let logging = LoggingConfig {
            dir: Some(PathBuf::from("/var/log/catalogscope")),
            ..LoggingConfig::default()
        };
        assert_eq!(logging.directory(), PathBuf::from("/var/log/catalogscope"));
        assert!(
            LoggingConfig::default()
                .directory()
                .ends_with(".catalogscope/logs")
        );
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "snapshot = \"/srv/catalog.json\"\nmax_limit = 25\n").unwrap();

        let config = ServiceConfig::load(Some(&path)).unwrap();
        assert_eq!(config.snapshot, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(config.max_limit, Some(25));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            ServiceConfig::load(Some(&missing)),
            Err(CatalogError::Io(_))
        ));
    }
}
