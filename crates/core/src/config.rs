//! Configuration management for Signet.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Directory name under the per-user data directory holding the key record.
pub const DEFAULT_KEY_DIR_NAME: &str = "signer";

/// File name of the persisted key pair record.
pub const DEFAULT_KEY_FILE_NAME: &str = "keypair.txt";

/// Directory name under the per-user config directory holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "signet";

/// File name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub keystore: KeyStoreConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyStoreConfig {
    /// Directory containing the key record. Created with owner-only access.
    pub dir: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for KeyStoreConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir().join(DEFAULT_KEY_DIR_NAME),
            file_name: DEFAULT_KEY_FILE_NAME.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| CoreError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    /// Loads configuration from `explicit` if given, otherwise from the
    /// per-user config file when one exists, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "Loading configuration");
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "Loading configuration");
                Self::from_file(path)
            }
            _ => Ok(Self::default_config()),
        }
    }

    /// Full path of the persisted key record.
    pub fn key_path(&self) -> PathBuf {
        self.keystore.dir.join(&self.keystore.file_name)
    }
}

/// `<config_dir>/signet/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."))
}
