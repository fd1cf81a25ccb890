//! Docstore - embeddable in-memory document repository
//!
//! Three operations over a volatile, concurrency-safe store:
//! upsert with creation-time preservation, multi-criteria search, and
//! lookup by identity.
//!
//! # Quick Start
//!
//! ```
//! use docstore::{Author, Database, Document, DocumentStore, SearchRequest};
//!
//! let docs = DocumentStore::new(Database::ephemeral());
//!
//! docs.upsert(
//!     Document::new()
//!         .with_title("Java Tasks")
//!         .with_content("Some content")
//!         .with_author(Author::new("a1")),
//! );
//! docs.upsert(Document::new().with_title("Python Tasks"));
//!
//! let hits = docs.search(&SearchRequest::new().with_title_prefixes(["Java"]));
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! # Architecture
//!
//! - `docstore-core`: data model, search predicate logic, errors, `Storage` trait
//! - `docstore-storage`: `ShardedStore` (DashMap) and `UnifiedStore` (RwLock)
//! - `docstore-engine`: `Database`, its config file and builder
//! - `docstore-primitives`: `DocumentStore`, the operations callers use

pub use docstore_core::{Author, Document, DocumentId, Error, Result, SearchRequest, Storage};
pub use docstore_engine::{Database, DatabaseBuilder, DatabaseConfig, StorageKind, CONFIG_FILE_NAME};
pub use docstore_primitives::DocumentStore;
