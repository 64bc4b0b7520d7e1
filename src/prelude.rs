// crate modules
pub use crate::{
    config::{ReaderConfig, FONTSIZE_KEY, POSITIONS_KEY},
    dispatch::KeyDispatcher,
    document::{Document, NavLink, PageDocument},
    error::StoreError,
    fonts::FontApplier,
    keys::{Key, KeyEvent, NavAction},
    model::{FontSize, PositionMap, PositionRecord},
    store::{FileStore, KeyValueStore, MemoryStore, PreferenceStore},
    ReaderSession,
};
