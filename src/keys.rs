//! Key events and the fixed key-to-navigation table.

/// Keys the dispatcher distinguishes. Everything else arrives as `Char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Char(char),
}

/// Navigation targets a page can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    PrevPage,
    NextPage,
    TableOfContents,
    Home,
}

impl NavAction {
    /// Accesskey the server stamps on this action's link.
    pub fn accesskey(&self) -> char {
        match self {
            NavAction::PrevPage => '4',
            NavAction::NextPage => '6',
            NavAction::TableOfContents => '5',
            NavAction::Home => '8',
        }
    }

    /// The key table, first match wins. Unmapped keys fall through.
    ///
    /// Digits mirror the d-pad of the target phones: 4/6 page left/right,
    /// 5 or Enter opens the table of contents, up/down/8 go home.
    pub fn for_key(key: &Key) -> Option<NavAction> {
        match key {
            Key::ArrowLeft | Key::Char('4') => Some(NavAction::PrevPage),
            Key::ArrowRight | Key::Char('6') => Some(NavAction::NextPage),
            Key::Char('5') | Key::Enter => Some(NavAction::TableOfContents),
            Key::ArrowUp | Key::ArrowDown | Key::Char('8') => Some(NavAction::Home),
            _ => None,
        }
    }
}

/// A key press as delivered by the host, with the consumed flag explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
