//! Sharded document storage
//!
//! DashMap keyed by DocumentId. Lock-striped: a read or write only locks
//! the shard owning its key, so writers to different shards never contend.
//!
//! # Design
//!
//! - DashMap: 4 × CPU shards by default (configurable, power of two)
//! - get(): shard read lock, clones the document out
//! - put()/upsert_with(): shard write lock for the duration of the write
//! - scan(): walks shards one at a time under a read lock each
//!
//! Because scan() never holds more than one shard, it is not a snapshot of
//! the whole store. A write to an already-visited shard during a scan is not
//! seen; a write to a later shard is.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use docstore_core::{Document, DocumentId, Storage};

/// Sharded document store
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - get(): Only read-locks the target shard
/// - put(): Only write-locks the target shard
/// - upsert_with(): Holds the target shard's write lock across read and write
///
/// # Example
///
/// ```
/// use docstore_core::{Document, DocumentId, Storage};
/// use docstore_storage::ShardedStore;
///
/// let store = ShardedStore::new();
/// store.put(DocumentId::from("a"), Document::new().with_id("a").with_title("A"));
/// assert_eq!(store.get("a").unwrap().title.as_deref(), Some("A"));
/// ```
#[derive(Debug)]
pub struct ShardedStore {
    documents: DashMap<DocumentId, Document>,
}

impl ShardedStore {
    /// Create new sharded store
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Create with expected number of documents
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: DashMap::with_capacity(capacity),
        }
    }

    /// Create with expected number of documents and an explicit shard amount
    ///
    /// `shard_amount` must be a power of two greater than one; the engine
    /// validates this before calling.
    pub fn with_capacity_and_shard_amount(capacity: usize, shard_amount: usize) -> Self {
        Self {
            documents: DashMap::with_capacity_and_shard_amount(capacity, shard_amount),
        }
    }
}

impl Default for ShardedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for ShardedStore {
    #[inline]
    fn get(&self, id: &str) -> Option<Document> {
        self.documents.get(id).map(|entry| entry.value().clone())
    }

    #[inline]
    fn put(&self, id: DocumentId, document: Document) {
        self.documents.insert(id, document);
    }

    fn upsert_with(
        &self,
        id: DocumentId,
        update: Box<dyn FnOnce(Option<&Document>) -> Document + '_>,
    ) -> Document {
        match self.documents.entry(id) {
            Entry::Occupied(mut occupied) => {
                let next = update(Some(occupied.get()));
                occupied.insert(next.clone());
                next
            }
            Entry::Vacant(vacant) => {
                let next = update(None);
                vacant.insert(next.clone());
                next
            }
        }
    }

    fn scan(&self, filter: &dyn Fn(&Document) -> bool) -> Vec<Document> {
        self.documents
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    #[inline]
    fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}
