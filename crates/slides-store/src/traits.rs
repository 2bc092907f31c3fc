use crate::error::StoreResult;
use crate::path::BlobPath;

/// Flat key-value store for whole-record metadata.
///
/// All implementations must satisfy these invariants:
/// - `get` on an absent key returns `Ok(None)`, never an error. Callers
///   decide per call site whether absence is benign or a failure.
/// - `set` overwrites unconditionally. There are no transactions, no
///   compare-and-swap, and no field-level updates; concurrent
///   read-modify-write cycles against the same key can lose updates.
/// - `delete` on an absent key is a no-op, not an error.
/// - All backend failures are propagated, never silently ignored.
pub trait MetadataStore: Send + Sync {
    /// Read the record bytes stored under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Remove `key` and its value, if present.
    fn delete(&self, key: &str) -> StoreResult<()>;
}

/// Hierarchical store for opaque content blobs.
///
/// Paths are segment lists; see [`BlobPath`]. `delete_prefix` matches the
/// joined path as a plain string prefix, which is what makes cascading
/// deletes (a whole slide, a whole user) single calls.
pub trait BlobStore: Send + Sync {
    /// Whether a blob exists at exactly `path`.
    fn exists(&self, path: &BlobPath) -> StoreResult<bool>;

    /// Read the blob at `path`. Returns `Ok(None)` if there is none.
    fn read(&self, path: &BlobPath) -> StoreResult<Option<Vec<u8>>>;

    /// Write `data` at `path`, replacing any previous blob.
    fn write(&self, path: &BlobPath, data: &[u8]) -> StoreResult<()>;

    /// Delete every blob whose joined path starts with the joined `prefix`.
    ///
    /// Passing a full blob path deletes exactly that blob. Deleting a prefix
    /// with no matches is a no-op.
    fn delete_prefix(&self, prefix: &BlobPath) -> StoreResult<()>;
}
