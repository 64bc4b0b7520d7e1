//! Applies the stored font preference to the page once it is ready.

use crate::document::Document;
use crate::store::PreferenceStore;

/// One-shot applier for the stored font preference.
///
/// Runs immediately when the document is already ready, otherwise waits for
/// the host's ready signal. Read failures are swallowed silently; the page
/// simply keeps the default font.
pub struct FontApplier {
    applied: bool,
}

impl FontApplier {
    pub fn new() -> Self {
        Self { applied: false }
    }

    /// Apply now if the document has already loaded.
    pub fn attach(&mut self, store: &PreferenceStore, doc: &mut dyn Document) {
        if doc.is_ready() {
            self.run(store, doc);
        }
    }

    /// The host's document-ready signal.
    pub fn document_ready(&mut self, store: &PreferenceStore, doc: &mut dyn Document) {
        self.run(store, doc);
    }

    fn run(&mut self, store: &PreferenceStore, doc: &mut dyn Document) {
        if self.applied {
            return;
        }
        self.applied = true;
        store.apply_font_size(doc);
    }
}

impl Default for FontApplier {
    fn default() -> Self {
        Self::new()
    }
}
