//! UnifiedStore: single-lock document storage
//!
//! This module implements the Storage trait using:
//! - `FxHashMap<DocumentId, Document>` for O(1) lookups
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **Whole-map locking**: every write takes the one write lock. Simple and
//!   predictable; use `ShardedStore` when writers contend.
//! - **Scans are consistent**: unlike `ShardedStore`, a scan holds the read
//!   lock for its full duration and so observes a single point in time.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use docstore_core::{Document, DocumentId, Storage};

/// Document store backed by an FxHashMap behind one RwLock
#[derive(Debug, Default)]
pub struct UnifiedStore {
    data: RwLock<FxHashMap<DocumentId, Document>>,
}

impl UnifiedStore {
    /// Create a new empty UnifiedStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }
}

impl Storage for UnifiedStore {
    fn get(&self, id: &str) -> Option<Document> {
        self.data.read().get(id).cloned()
    }

    fn put(&self, id: DocumentId, document: Document) {
        self.data.write().insert(id, document);
    }

    fn upsert_with(
        &self,
        id: DocumentId,
        update: Box<dyn FnOnce(Option<&Document>) -> Document + '_>,
    ) -> Document {
        let mut data = self.data.write();
        let next = update(data.get(id.as_str()));
        data.insert(id, next.clone());
        next
    }

    fn scan(&self, filter: &dyn Fn(&Document) -> bool) -> Vec<Document> {
        self.data
            .read()
            .values()
            .filter(|doc| filter(doc))
            .cloned()
            .collect()
    }

    fn contains(&self, id: &str) -> bool {
        self.data.read().contains_key(id)
    }

    fn len(&self) -> usize {
        self.data.read().len()
    }
}
