//! Maps key presses onto the page's navigation links.

use log::debug;

use crate::document::Document;
use crate::keys::{KeyEvent, NavAction};

/// Process-wide key listener. Registered once per page and never
/// unregistered; its lifetime is the page's lifetime.
#[derive(Debug, Default)]
pub struct KeyDispatcher;

impl KeyDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Handle one key press.
    ///
    /// A mapped key whose link exists on the page consumes the event and
    /// activates the link. A mapped key without a link does nothing, since
    /// not every page exposes all four targets. Unmapped keys pass through
    /// untouched.
    pub fn dispatch(&self, event: &mut KeyEvent, doc: &mut dyn Document) -> Option<NavAction> {
        let action = NavAction::for_key(&event.key)?;
        if !doc.activate_link(action.accesskey()) {
            return None;
        }
        event.prevent_default();
        debug!("Key {:?} -> {:?}", event.key, action);
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{NavLink, PageDocument};
    use crate::keys::Key;

    fn reading_page() -> PageDocument {
        PageDocument::with_links(vec![
            NavLink::new('4', "/moby/4.html"),
            NavLink::new('5', "/moby/toc.html"),
            NavLink::new('6', "/moby/6.html"),
            NavLink::new('8', "/index.html"),
        ])
    }

    #[test]
    fn arrow_right_follows_the_next_link_and_consumes_the_event() {
        let dispatcher = KeyDispatcher::new();
        let mut doc = reading_page();
        let mut event = KeyEvent::new(Key::ArrowRight);

        let action = dispatcher.dispatch(&mut event, &mut doc);

        assert_eq!(action, Some(NavAction::NextPage));
        assert!(event.default_prevented());
        assert_eq!(doc.last_followed(), Some("/moby/6.html"));
    }

    #[test]
    fn mapped_key_without_a_link_passes_through() {
        let dispatcher = KeyDispatcher::new();
        // Last page of a book: no next link.
        let mut doc = PageDocument::with_links(vec![NavLink::new('4', "/moby/11.html")]);
        let mut event = KeyEvent::new(Key::ArrowRight);

        let action = dispatcher.dispatch(&mut event, &mut doc);

        assert_eq!(action, None);
        assert!(!event.default_prevented());
        assert_eq!(doc.last_followed(), None);
    }

    #[test]
    fn unmapped_key_passes_through() {
        let dispatcher = KeyDispatcher::new();
        let mut doc = reading_page();
        let mut event = KeyEvent::new(Key::Char('1'));

        assert_eq!(dispatcher.dispatch(&mut event, &mut doc), None);
        assert!(!event.default_prevented());
        assert_eq!(doc.last_followed(), None);
    }

    #[test]
    fn enter_opens_the_table_of_contents() {
        let dispatcher = KeyDispatcher::new();
        let mut doc = reading_page();
        let mut event = KeyEvent::new(Key::Enter);

        assert_eq!(
            dispatcher.dispatch(&mut event, &mut doc),
            Some(NavAction::TableOfContents)
        );
        assert_eq!(doc.last_followed(), Some("/moby/toc.html"));
    }

    #[test]
    fn duplicate_accesskeys_resolve_to_the_first_link() {
        let dispatcher = KeyDispatcher::new();
        let mut doc = PageDocument::with_links(vec![
            NavLink::new('8', "/index.html"),
            NavLink::new('8', "/duplicate.html"),
        ]);
        let mut event = KeyEvent::new(Key::ArrowDown);

        dispatcher.dispatch(&mut event, &mut doc);
        assert_eq!(doc.last_followed(), Some("/index.html"));
    }
}
