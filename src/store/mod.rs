//! Preference store: reading positions and font size over a pluggable
//! key-value backend.
//!
//! The backend stands in for the browser's key-value storage, which on the
//! target devices may be missing, quota-restricted, or holding garbage.
//! Every public operation here absorbs backend failures into its documented
//! fallback and logs a diagnostic; nothing propagates to the host.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};

use crate::config::{FONTSIZE_KEY, POSITIONS_KEY};
use crate::document::Document;
use crate::error::StoreError;
use crate::model::{FontSize, PositionMap, PositionRecord};

/// Key-value backend the preference store persists through.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The reader's preferences: one position record per book slug plus a font
/// size, all behind a backend chosen by the host.
pub struct PreferenceStore {
    backend: Box<dyn KeyValueStore>,
    positions_key: String,
    fontsize_key: String,
    default_font: FontSize,
}

impl PreferenceStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self::with_default_font(backend, FontSize::default())
    }

    /// Store whose unset font preference reads as `default_font`.
    pub fn with_default_font(backend: Box<dyn KeyValueStore>, default_font: FontSize) -> Self {
        Self {
            backend,
            positions_key: POSITIONS_KEY.to_string(),
            fontsize_key: FONTSIZE_KEY.to_string(),
            default_font,
        }
    }

    /// Record the last-viewed page for a book. The newest save for a slug
    /// overwrites the previous one.
    ///
    /// `page` is stored as given: the host is the only caller and pages it
    /// considers valid are valid here. On failure the position is simply not
    /// remembered.
    pub fn save_position(&mut self, slug: &str, page: i64) {
        let mut positions = self.load_positions();
        positions.insert(
            slug.to_string(),
            PositionRecord {
                page,
                timestamp: now_millis(),
            },
        );
        match self.write_positions(&positions) {
            Ok(()) => debug!("Saved position {} for '{}'", page, slug),
            Err(e) => warn!("Failed to save position for '{}': {}", slug, e),
        }
    }

    /// Last-viewed page for a book, or `None` when nothing usable is stored.
    pub fn get_position(&self, slug: &str) -> Option<i64> {
        self.load_positions().get(slug).map(|record| record.page)
    }

    /// The full position map. Empty when the blob is absent, unreadable, or
    /// fails shape validation.
    pub fn load_positions(&self) -> PositionMap {
        match self.read_positions() {
            Ok(positions) => positions,
            Err(e) => {
                warn!("Failed to load positions: {}", e);
                PositionMap::new()
            }
        }
    }

    fn read_positions(&self) -> Result<PositionMap, StoreError> {
        let Some(blob) = self.backend.get(&self.positions_key)? else {
            return Ok(PositionMap::new());
        };
        serde_json::from_str(&blob).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn write_positions(&mut self, positions: &PositionMap) -> Result<(), StoreError> {
        let blob =
            serde_json::to_string(positions).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend.set(&self.positions_key, &blob)
    }

    /// Persist the font preference and restyle the current document: all
    /// body classes are dropped and the size's class added, medium meaning
    /// no class at all.
    ///
    /// The restyle happens even when persistence fails; a broken store only
    /// loses the preference for future sessions.
    pub fn set_font_size(&mut self, size: FontSize, doc: &mut dyn Document) {
        if let Err(e) = self.backend.set(&self.fontsize_key, size.as_str()) {
            warn!("Failed to save font size '{}': {}", size, e);
        }
        doc.clear_body_classes();
        if let Some(class) = size.css_class() {
            doc.add_body_class(class);
        }
    }

    /// The current preference, for hosts rendering the settings page.
    /// Absent or corrupt values read as the configured default.
    pub fn font_size(&self) -> FontSize {
        match self.backend.get(&self.fontsize_key) {
            Ok(Some(raw)) => raw.parse().unwrap_or(self.default_font),
            _ => self.default_font,
        }
    }

    /// Restyle the document from the stored preference, leaving existing
    /// classes in place. Absent, corrupt, or medium values do nothing.
    pub fn apply_font_size(&self, doc: &mut dyn Document) {
        let Ok(Some(raw)) = self.backend.get(&self.fontsize_key) else {
            return;
        };
        let Ok(size) = raw.parse::<FontSize>() else {
            return;
        };
        if let Some(class) = size.css_class() {
            doc.add_body_class(class);
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
