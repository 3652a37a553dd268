//! Configuration management for InfoVerify.
//!
//! Loads configuration from ${INFOVERIFY_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for InfoVerify configuration and data directories.
    //!
    //! INFOVERIFY_HOME resolution order:
    //! 1. INFOVERIFY_HOME environment variable (if set)
    //! 2. ~/.config/infoverify (default)
    //! 3. ./.infoverify when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the InfoVerify home directory.
    pub fn infoverify_home() -> PathBuf {
        if let Ok(home) = std::env::var("INFOVERIFY_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".infoverify"),
            |h| h.join(".config").join("infoverify"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        infoverify_home().join("config.toml")
    }

    /// Returns the path to the local storage file.
    pub fn storage_path() -> PathBuf {
        infoverify_home().join("local_storage.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        infoverify_home().join("logs")
    }
}

/// Mock sign-in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated network latency for sign-in and registration.
    pub request_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: 1000,
        }
    }
}

/// Toast lifetimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub success_ms: u64,
    pub error_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            success_ms: 2000,
            error_ms: 4000,
        }
    }
}

/// Document intake configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Directory the file picker searches (relative paths resolve from the working directory).
    pub root: PathBuf,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `INFOVERIFY_LOG`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub notifications: NotificationsConfig,
    pub documents: DocumentsConfig,
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`.
    ///
    /// Fails if a file already exists there.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth.request_delay_ms)
    }

    pub fn success_ttl(&self) -> Duration {
        Duration::from_millis(self.notifications.success_ms)
    }

    pub fn error_ttl(&self) -> Duration {
        Duration::from_millis(self.notifications.error_ms)
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.auth_delay(), Duration::from_secs(1));
        assert_eq!(config.success_ttl(), Duration::from_secs(2));
        assert_eq!(config.error_ttl(), Duration::from_secs(4));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[auth]\nrequest_delay_ms = 250\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.auth.request_delay_ms, 250);
        assert_eq!(config.notifications, NotificationsConfig::default());
        assert_eq!(config.documents.root, PathBuf::from("."));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[auth\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::init(&path).unwrap();
        assert!(path.exists());
        assert!(Config::init(&path).is_err());
    }
}
