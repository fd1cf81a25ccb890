//! DocumentStore: document repository primitive
//!
//! ## Design: STATELESS FACADE
//!
//! DocumentStore holds ONLY `Arc<Database>`. All documents live in the
//! Database's record store.
//!
//! ## Upsert rule
//!
//! - A document without an id (or with an empty id) gets a generated UUID.
//! - `created` is write-once per identity. The first upsert fixes it to the
//!   caller's value, or to the current time if the caller gave none. Later
//!   upserts under the same identity keep the fixed value and ignore
//!   whatever the caller supplied.
//! - Every other field is replaced wholesale. Omitting `content` in a later
//!   upsert clears it.
//!
//! The lookup of the existing document and the write of its replacement run
//! under the store's per-key lock, so racing first-writes under one identity
//! agree on a single `created`.
//!
//! ## Thread Safety
//!
//! DocumentStore is `Send + Sync` and can be cloned freely across threads.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use docstore_core::{Document, DocumentId, Error, Result, SearchRequest};
use docstore_engine::Database;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

/// Document repository primitive
///
/// # Example
///
/// ```
/// use docstore_core::{Author, Document, SearchRequest};
/// use docstore_engine::Database;
/// use docstore_primitives::DocumentStore;
///
/// let docs = DocumentStore::new(Database::ephemeral());
///
/// let saved = docs.upsert(
///     Document::new()
///         .with_title("Java Tasks")
///         .with_author(Author::new("a1")),
/// );
/// assert!(saved.id.is_some());
/// assert!(saved.created.is_some());
///
/// let hits = docs.search(&SearchRequest::new().with_title_prefixes(["Java"]));
/// assert_eq!(hits, vec![saved.clone()]);
///
/// let id = saved.id_str().unwrap();
/// assert_eq!(docs.find_by_id(id), Some(saved));
/// ```
#[derive(Clone)]
pub struct DocumentStore {
    db: Arc<Database>,
}

impl DocumentStore {
    /// Create new DocumentStore instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the underlying database reference
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Insert a new document or replace an existing one
    ///
    /// Returns the document exactly as stored: with its resolved id and
    /// frozen `created`.
    pub fn upsert(&self, mut document: Document) -> Document {
        let id = match document.id.take() {
            Some(id) if !id.is_empty() => id,
            _ => DocumentId::generate(),
        };
        document.id = Some(id.clone());

        let stored = self.db.storage().upsert_with(
            id,
            Box::new(move |existing: Option<&Document>| {
                let created = existing
                    .and_then(|prior| prior.created)
                    .or(document.created)
                    .unwrap_or_else(Utc::now);
                Document {
                    created: Some(created),
                    ..document
                }
            }),
        );

        debug!(
            target: "docstore::document",
            id = stored.id_str().unwrap_or_default(),
            created = ?stored.created,
            "Document upserted"
        );

        stored
    }

    /// Upsert each document in order
    ///
    /// Each upsert stands alone; there is no atomicity across the batch.
    pub fn upsert_all<I>(&self, documents: I) -> Vec<Document>
    where
        I: IntoIterator<Item = Document>,
    {
        documents.into_iter().map(|doc| self.upsert(doc)).collect()
    }

    /// Upsert a document handed in as an untyped JSON value
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for `null`, a non-object, or an object that
    /// does not decode as a document. Nothing is written in that case.
    pub fn upsert_value(&self, value: JsonValue) -> Result<Document> {
        let document: Document = decode(value, "document")?;
        Ok(self.upsert(document))
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Return every stored document matching all active groups of `request`
    ///
    /// Order is unspecified. An empty request returns every document.
    pub fn search(&self, request: &SearchRequest) -> Vec<Document> {
        let start = Instant::now();
        let results = self.db.storage().scan(&|doc| request.matches(doc));

        debug!(
            target: "docstore::document",
            matched = results.len(),
            filtered = !request.is_empty(),
            duration_us = start.elapsed().as_micros() as u64,
            "Search completed"
        );

        results
    }

    /// Search with a request handed in as an untyped JSON value
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for `null`, a non-object, or an object that
    /// does not decode as a search request.
    pub fn search_value(&self, value: JsonValue) -> Result<Vec<Document>> {
        let request: SearchRequest = decode(value, "search request")?;
        Ok(self.search(&request))
    }

    /// Get the document stored under `id`
    ///
    /// A missing id is not an error: returns `None`.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        self.db.storage().get(id)
    }

    /// Check if a document is stored under `id`
    pub fn exists(&self, id: &str) -> bool {
        self.db.storage().contains(id)
    }

    /// Number of stored documents
    pub fn count(&self) -> usize {
        self.db.storage().len()
    }
}

/// Decode a caller-supplied JSON value, rejecting null and non-objects
fn decode<T: DeserializeOwned>(value: JsonValue, what: &str) -> Result<T> {
    if value.is_null() {
        warn!(target: "docstore::document", what, "Rejected null input");
        return Err(Error::invalid_argument(format!("{} must not be null", what)));
    }
    if !value.is_object() {
        warn!(target: "docstore::document", what, "Rejected non-object input");
        return Err(Error::invalid_argument(format!(
            "{} must be a JSON object",
            what
        )));
    }
    serde_json::from_value(value).map_err(|e| {
        warn!(target: "docstore::document", what, error = %e, "Rejected malformed input");
        Error::invalid_argument(format!("malformed {}: {}", what, e))
    })
}
