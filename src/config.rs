//! Configuration for the search backend process.

use assistant_search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "MYASSISTANT_CONFIG";

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Top-level configuration for the backend server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind (`0` picks a free port).
    pub port: u16,
    /// Search provider settings.
    pub search: SearchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 4000,
            search: SearchConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::ServerError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::ServerError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/myassistant/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("myassistant").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("myassistant")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/myassistant-config/config.toml")
        }
    }

    /// Load the process configuration.
    ///
    /// Reads `$MYASSISTANT_CONFIG` or the default path when the file exists,
    /// otherwise starts from defaults. `$PORT` overrides the port.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be parsed, `$PORT` is not
    /// a valid port, or the search settings fail validation.
    pub fn load() -> crate::error::Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);
        let port = std::env::var(PORT_ENV).ok();
        Self::load_from(&path, port.as_deref())
    }

    /// Load from `path` (if it exists) and apply an optional port override.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::load`].
    pub fn load_from(path: &Path, port_override: Option<&str>) -> crate::error::Result<Self> {
        let mut config = if path.exists() {
            tracing::info!(path = %path.display(), "loading config");
            Self::from_file(path)?
        } else {
            Self::default()
        };

        if let Some(raw) = port_override.map(str::trim).filter(|p| !p.is_empty()) {
            config.port = raw.parse().map_err(|e| {
                crate::error::ServerError::Config(format!("invalid {PORT_ENV} value {raw:?}: {e}"))
            })?;
        }

        config.search.validate()?;
        Ok(config)
    }
}
