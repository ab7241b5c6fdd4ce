//! Application configuration for the wordsieve binary.
//!
//! One YAML file configures both the service (`server`, `dictionary`) and the matcher
//! (`sieve`, passed through to `wordsieve-core`). Every field has a default, so an empty
//! file or no file at all is valid. Command-line flags override file values.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use wordsieve_core::SieveConfig;

pub const DEFAULT_BIND: &str = "0.0.0.0:80";
pub const DEFAULT_DICTIONARY: &str = "dic/words.txt";
const CONFIG_DIR_NAME: &str = "wordsieve";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// What to do when the dictionary cannot be read at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailurePolicy {
    /// Refuse to start.
    #[default]
    Abort,
    /// Log the error and serve with an empty vocabulary.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// File path or http(s) URL.
    pub source: String,
    pub on_load_failure: LoadFailurePolicy,
    /// Write add/delete edits back to `source` (files only).
    pub persist: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_DICTIONARY.to_string(),
            on_load_failure: LoadFailurePolicy::default(),
            persist: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub dictionary: DictionaryConfig,
    pub server: ServerConfig,
    pub sieve: SieveConfig,
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(text)?;
        config.sieve.validate()?;
        Ok(config)
    }

    /// `<config dir>/wordsieve/config.yaml`, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `explicit` if given, else the default path if it exists, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => {
                debug!("No configuration file found; using defaults.");
                Ok(Self::default())
            }
        }
    }
}
