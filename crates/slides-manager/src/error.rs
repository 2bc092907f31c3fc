use slides_store::StoreError;
use thiserror::Error;

/// Errors surfaced by slide and page operations.
///
/// `Store` and `CorruptRecord` are kept distinct so callers can tell "store
/// unreachable" apart from "stored bytes no longer parse as the expected
/// record".
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The slide id is not listed for this user, or its parent record is
    /// missing where the operation requires one.
    #[error("slide does not exist: {0}")]
    SlideNotFound(String),

    /// The page id is not listed in the slide's detail record.
    #[error("page does not exist: {0}")]
    PageNotFound(String),

    /// A page position argument fell outside the page list.
    #[error("page index {index} out of range for {count} pages")]
    IndexOutOfRange { index: usize, count: usize },

    /// The underlying store call failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Stored bytes do not parse as the expected record shape.
    #[error("corrupt record at key {key}: {reason}")]
    CorruptRecord { key: String, reason: String },
}

/// Result alias for manager operations.
pub type ManagerResult<T> = Result<T, ManagerError>;
