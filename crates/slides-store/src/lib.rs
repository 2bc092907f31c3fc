//! Storage contracts consumed by the slide document service.
//!
//! The service keeps its records in two independent stores:
//!
//! - [`MetadataStore`] — a flat key-value store holding whole JSON records.
//!   No transactions, no conditional writes, no field-level updates: every
//!   logical mutation is read-whole-record / modify / write-whole-record in
//!   the caller.
//! - [`BlobStore`] — a hierarchical object store holding opaque page content,
//!   addressed by [`BlobPath`] and bulk-deleted by path prefix.
//!
//! There is no cross-store transaction. Callers own the partial-failure
//! policy for every multi-write operation.
//!
//! # Backends
//!
//! Production backends wrap whatever infrastructure hosts the data; this
//! crate ships [`InMemoryMetadataStore`] and [`InMemoryBlobStore`] for tests
//! and embedding.

pub mod error;
pub mod memory;
pub mod path;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryBlobStore, InMemoryMetadataStore};
pub use path::BlobPath;
pub use traits::{BlobStore, MetadataStore};
