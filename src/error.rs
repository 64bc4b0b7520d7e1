//! Unified error type for the storage layer.

use thiserror::Error;

/// All ways the persistent store can fail.
///
/// The host never sees these: every public operation absorbs them into its
/// documented fallback (no-op save, `None` read, empty map). The variants
/// only discriminate diagnostics in the log.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable")]
    Unavailable,
    #[error("Corrupt stored data: {0}")]
    Corrupt(String),
    #[error("Serialize error: {0}")]
    Serialize(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
