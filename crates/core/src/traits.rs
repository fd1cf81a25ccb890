//! Core traits for storage abstraction
//!
//! This module defines the Storage trait that lets the engine swap the
//! record store implementation without touching the document primitive.

use crate::types::{Document, DocumentId};

/// Concurrency-safe record store keyed by document identity
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync). Each record is written as a
/// whole, so readers never observe a partially written document.
///
/// Enumeration (`scan`, `values`) is a live view, not a point-in-time
/// snapshot: a record written concurrently may or may not be seen.
pub trait Storage: Send + Sync {
    /// Get the document stored under `id`
    fn get(&self, id: &str) -> Option<Document>;

    /// Insert or replace the document stored under `id`
    fn put(&self, id: DocumentId, document: Document);

    /// Read-modify-write one identity atomically
    ///
    /// `update` receives the current document (if any) and returns the
    /// replacement, which is stored under `id` and returned. No other
    /// writer to `id` can interleave between the read and the write.
    fn upsert_with(
        &self,
        id: DocumentId,
        update: Box<dyn FnOnce(Option<&Document>) -> Document + '_>,
    ) -> Document;

    /// Collect every stored document accepted by `filter`
    ///
    /// Rejected documents are never cloned.
    fn scan(&self, filter: &dyn Fn(&Document) -> bool) -> Vec<Document>;

    /// Collect every stored document
    fn values(&self) -> Vec<Document> {
        self.scan(&|_| true)
    }

    /// Check if a document is stored under `id`
    fn contains(&self, id: &str) -> bool;

    /// Number of stored documents
    fn len(&self) -> usize;

    /// True if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
