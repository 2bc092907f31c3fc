use thiserror::Error;

/// Errors from metadata or blob store operations.
///
/// These are connectivity and backend failures only. Callers that find the
/// *bytes* unusable (a record that no longer parses) report that separately,
/// so "store unreachable" and "record corrupted" stay distinguishable.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the call.
    #[error("store backend error: {0}")]
    Backend(String),

    /// The backend is temporarily unreachable.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// I/O error from the underlying storage backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
