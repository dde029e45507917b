use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kino_core::{DEFAULT_USE_CUSTOM_PLAYER, PREFERENCE_KEY};
use kino_logging::{kino_info, kino_warn};
use kino_prefs::{JsonFileStore, KeyValueStore, MemoryStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid page config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Per-page settings, read from a RON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Storage key of the player preference.
    pub preference_key: String,
    /// Preference used when storage holds nothing usable.
    pub default_use_custom_player: bool,
    /// JSON file backing durable storage; in-memory storage when unset.
    pub storage_path: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            preference_key: PREFERENCE_KEY.to_string(),
            default_use_custom_player: DEFAULT_USE_CUSTOM_PLAYER,
            storage_path: None,
        }
    }
}

pub fn parse_config(text: &str) -> Result<PageConfig, ConfigError> {
    Ok(ron::from_str(text)?)
}

pub fn read_config(path: &Path) -> Result<PageConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

/// Loads the config at `path`, falling back to defaults when it is missing or invalid.
pub fn load_config(path: &Path) -> PageConfig {
    match read_config(path) {
        Ok(config) => {
            kino_info!("Loaded page config from {:?}", path);
            config
        }
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            PageConfig::default()
        }
        Err(err) => {
            kino_warn!("Failed to load page config from {:?}: {}", path, err);
            PageConfig::default()
        }
    }
}

/// Opens the storage backend the config names.
pub fn open_store(config: &PageConfig) -> Box<dyn KeyValueStore> {
    match &config.storage_path {
        Some(path) => Box::new(JsonFileStore::new(path.clone())),
        None => Box::new(MemoryStore::new()),
    }
}
