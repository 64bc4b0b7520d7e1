//! Seam between the reader state and the rendered page.

/// The slice of the host page this crate touches: navigation links addressed
/// by accesskey, the body class list, and the loaded/ready flag.
pub trait Document {
    /// Whether the page has finished loading.
    fn is_ready(&self) -> bool;

    /// Activate the first link in document order carrying `accesskey`.
    /// Returns `false` when the page exposes no such link.
    fn activate_link(&mut self, accesskey: char) -> bool;

    fn add_body_class(&mut self, class: &str);

    fn clear_body_classes(&mut self);
}

/// A navigation link the server rendered into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub accesskey: char,
    pub href: String,
}

impl NavLink {
    pub fn new(accesskey: char, href: impl Into<String>) -> Self {
        Self {
            accesskey,
            href: href.into(),
        }
    }
}

/// In-memory model of a rendered WebBooks page.
///
/// Hosts mirror the anchors and body classes of the page they rendered into
/// this, and read back which link was followed.
#[derive(Debug, Default)]
pub struct PageDocument {
    links: Vec<NavLink>,
    body_classes: Vec<String>,
    ready: bool,
    last_followed: Option<String>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ready page exposing the given links.
    pub fn with_links(links: Vec<NavLink>) -> Self {
        Self {
            links,
            ready: true,
            ..Self::default()
        }
    }

    pub fn push_link(&mut self, link: NavLink) {
        self.links.push(link);
    }

    /// The host's document-ready signal has fired.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub fn body_classes(&self) -> &[String] {
        &self.body_classes
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.iter().any(|c| c == class)
    }

    /// Href of the most recently activated link, if any.
    pub fn last_followed(&self) -> Option<&str> {
        self.last_followed.as_deref()
    }
}

impl Document for PageDocument {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn activate_link(&mut self, accesskey: char) -> bool {
        let Some(link) = self.links.iter().find(|l| l.accesskey == accesskey) else {
            return false;
        };
        self.last_followed = Some(link.href.clone());
        true
    }

    fn add_body_class(&mut self, class: &str) {
        // classList.add semantics: adding an existing class is a no-op.
        if !self.has_body_class(class) {
            self.body_classes.push(class.to_string());
        }
    }

    fn clear_body_classes(&mut self) {
        self.body_classes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activates_the_first_matching_link() {
        let mut doc = PageDocument::with_links(vec![
            NavLink::new('6', "/moby/7.html"),
            NavLink::new('6', "/moby/999.html"),
        ]);
        assert!(doc.activate_link('6'));
        assert_eq!(doc.last_followed(), Some("/moby/7.html"));
    }

    #[test]
    fn missing_accesskey_activates_nothing() {
        let mut doc = PageDocument::with_links(vec![NavLink::new('4', "/moby/5.html")]);
        assert!(!doc.activate_link('6'));
        assert_eq!(doc.last_followed(), None);
    }

    #[test]
    fn body_classes_deduplicate() {
        let mut doc = PageDocument::new();
        doc.add_body_class("font-large");
        doc.add_body_class("font-large");
        assert_eq!(doc.body_classes(), ["font-large"]);
        doc.clear_body_classes();
        assert!(doc.body_classes().is_empty());
    }
}
