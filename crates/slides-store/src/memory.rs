//! In-memory store backends for tests and embedding.
//!
//! Both stores hold their data in a map behind a `RwLock`. Values are cloned
//! on read and write, and data is lost when the store is dropped.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::path::BlobPath;
use crate::traits::{BlobStore, MetadataStore};

/// HashMap-backed [`MetadataStore`].
pub struct InMemoryMetadataStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryMetadataStore {
    /// Create a new empty metadata store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all keys from the store.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// A sorted list of all keys in the store.
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryMetadataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut entries = self.entries.write().expect("lock poisoned");
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().expect("lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryMetadataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryMetadataStore")
            .field("key_count", &self.len())
            .finish()
    }
}

/// BTreeMap-backed [`BlobStore`].
///
/// Keys are joined paths; the ordered map makes prefix scans cheap.
pub struct InMemoryBlobStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    /// Create a new empty blob store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of blobs currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no blobs.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Remove all blobs from the store.
    pub fn clear(&self) {
        self.objects.write().expect("lock poisoned").clear();
    }

    /// A sorted list of all joined paths in the store.
    pub fn paths(&self) -> Vec<String> {
        let objects = self.objects.read().expect("lock poisoned");
        objects.keys().cloned().collect()
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn exists(&self, path: &BlobPath) -> StoreResult<bool> {
        let objects = self.objects.read().expect("lock poisoned");
        Ok(objects.contains_key(&path.joined()))
    }

    fn read(&self, path: &BlobPath) -> StoreResult<Option<Vec<u8>>> {
        let objects = self.objects.read().expect("lock poisoned");
        Ok(objects.get(&path.joined()).cloned())
    }

    fn write(&self, path: &BlobPath, data: &[u8]) -> StoreResult<()> {
        let mut objects = self.objects.write().expect("lock poisoned");
        objects.insert(path.joined(), data.to_vec());
        Ok(())
    }

    fn delete_prefix(&self, prefix: &BlobPath) -> StoreResult<()> {
        let prefix = prefix.joined();
        let mut objects = self.objects.write().expect("lock poisoned");
        objects.retain(|path, _| !path.starts_with(&prefix));
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlobStore")
            .field("blob_count", &self.len())
            .finish()
    }
}
