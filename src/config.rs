//! Storage keys and host configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::FontSize;

/// Storage key for the serialized position map.
pub const POSITIONS_KEY: &str = "webbooks_positions";
/// Storage key for the font size preference.
pub const FONTSIZE_KEY: &str = "webbooks_fontsize";

/// Host-side configuration for a reader session.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Directory for the file-backed store. `None` keeps state in memory.
    pub storage_dir: Option<PathBuf>,
    /// Font size assumed when no preference has been saved.
    pub default_font_size: FontSize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            default_font_size: FontSize::Medium,
        }
    }
}

impl ReaderConfig {
    /// Read a config file. Hosts without one use `Default`.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| StoreError::Config(e.to_string()))
    }
}
