//! Reader-side state for the WebBooks web reader: last-read positions, the
//! font size preference, and key navigation over server-rendered pages.
//!
//! WebBooks serves pre-paginated books as static HTML for feature phones.
//! Each page carries navigation links with accesskeys 4/5/6/8 (previous,
//! table of contents, next, home). The host constructs one [`ReaderSession`]
//! per page and forwards key presses and the document-ready signal to it;
//! positions and the font preference persist through whatever
//! [`store::KeyValueStore`] backend the host injects.
//!
//! Storage on the target devices is best-effort: it may be missing entirely
//! or refuse writes. Every operation degrades to a safe default instead of
//! surfacing that; an unsaved position just means the reader starts from
//! page one next time.

pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod fonts;
pub mod keys;
pub mod model;
pub mod prelude;
pub mod store;

use crate::config::ReaderConfig;
use crate::dispatch::KeyDispatcher;
use crate::document::Document;
use crate::fonts::FontApplier;
use crate::keys::{KeyEvent, NavAction};
use crate::model::FontSize;
use crate::store::{FileStore, KeyValueStore, MemoryStore, PreferenceStore};

/// Per-page reader session: the preference store, key dispatcher, and font
/// applier behind the entry points the host page calls.
pub struct ReaderSession {
    store: PreferenceStore,
    dispatcher: KeyDispatcher,
    applier: FontApplier,
}

impl ReaderSession {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self {
            store: PreferenceStore::new(backend),
            dispatcher: KeyDispatcher::new(),
            applier: FontApplier::new(),
        }
    }

    /// Session backed per the host configuration. An unusable storage
    /// directory falls back to the in-memory store; reading must keep
    /// working on devices where persistence is denied.
    pub fn from_config(config: &ReaderConfig) -> Self {
        let backend: Box<dyn KeyValueStore> = match &config.storage_dir {
            Some(dir) => match FileStore::new(dir) {
                Ok(store) => Box::new(store),
                Err(e) => {
                    log::warn!("Storage dir unusable, keeping state in memory: {}", e);
                    Box::new(MemoryStore::new())
                }
            },
            None => Box::new(MemoryStore::new()),
        };
        Self {
            store: PreferenceStore::with_default_font(backend, config.default_font_size),
            dispatcher: KeyDispatcher::new(),
            applier: FontApplier::new(),
        }
    }

    /// Build a session against a page, styling it immediately if it has
    /// already loaded.
    pub fn attach(backend: Box<dyn KeyValueStore>, doc: &mut dyn Document) -> Self {
        let mut session = Self::new(backend);
        session.applier.attach(&session.store, doc);
        session
    }

    /// Record the last-viewed page for a book.
    pub fn save_position(&mut self, slug: &str, page: i64) {
        self.store.save_position(slug, page);
    }

    /// Last-viewed page for a book, or `None` when nothing usable is stored.
    pub fn get_position(&self, slug: &str) -> Option<i64> {
        self.store.get_position(slug)
    }

    /// Persist the font preference and restyle the current page.
    pub fn set_font_size(&mut self, size: FontSize, doc: &mut dyn Document) {
        self.store.set_font_size(size, doc);
    }

    /// The process-wide key listener body: forward every key press here.
    pub fn handle_key(&self, event: &mut KeyEvent, doc: &mut dyn Document) -> Option<NavAction> {
        self.dispatcher.dispatch(event, doc)
    }

    /// The host's document-ready signal; applies the stored font once.
    pub fn document_ready(&mut self, doc: &mut dyn Document) {
        self.applier.document_ready(&self.store, doc);
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{NavLink, PageDocument};
    use crate::keys::Key;

    #[test]
    fn attach_styles_an_already_loaded_page() {
        let mut backend = MemoryStore::new();
        backend.set(config::FONTSIZE_KEY, "large").unwrap();

        let mut doc = PageDocument::new();
        doc.mark_ready();
        let _session = ReaderSession::attach(Box::new(backend), &mut doc);
        assert!(doc.has_body_class("font-large"));
    }

    #[test]
    fn attach_defers_until_the_ready_signal() {
        let mut backend = MemoryStore::new();
        backend.set(config::FONTSIZE_KEY, "small").unwrap();

        let mut doc = PageDocument::new();
        let mut session = ReaderSession::attach(Box::new(backend), &mut doc);
        assert!(!doc.has_body_class("font-small"));

        doc.mark_ready();
        session.document_ready(&mut doc);
        assert!(doc.has_body_class("font-small"));
    }

    #[test]
    fn session_wires_keys_to_the_page() {
        let session = ReaderSession::new(Box::new(MemoryStore::new()));
        let mut doc = PageDocument::with_links(vec![NavLink::new('6', "/moby/2.html")]);
        let mut event = KeyEvent::new(Key::Char('6'));

        assert_eq!(session.handle_key(&mut event, &mut doc), Some(NavAction::NextPage));
        assert_eq!(doc.last_followed(), Some("/moby/2.html"));
    }

    #[test]
    fn from_config_without_a_dir_stays_in_memory() {
        let mut session = ReaderSession::from_config(&ReaderConfig::default());
        session.save_position("moby", 4);
        assert_eq!(session.get_position("moby"), Some(4));
    }
}
