//! Docstore Comprehensive Test Suite
//!
//! End-to-end coverage of the public `docstore` API.
//!
//! ## Modules
//!
//! - `upsert`: identity assignment and creation-time preservation
//! - `search`: filter groups, their combination, and boundary behaviour
//! - `lookup`: find by id and existence checks
//! - `concurrency`: racing writers and readers on both store kinds
//! - `config`: `docstore.toml` loading and the builder
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test docstore_comprehensive
//!
//! # Search tests only
//! cargo test --test docstore_comprehensive search::
//!
//! # With log output
//! RUST_LOG=docstore=debug cargo test --test docstore_comprehensive -- --nocapture
//! ```

use std::sync::{Arc, Once};

use chrono::{DateTime, Utc};
use docstore::{Author, Database, Document, DocumentStore, SearchRequest, StorageKind};

mod lookup;
mod search;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness so `--nocapture` shows it
fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Fresh store on the default (sharded) database
pub fn store() -> DocumentStore {
    init_tracing();
    DocumentStore::new(Database::ephemeral())
}

/// One fresh store per storage kind
pub fn stores() -> Vec<(StorageKind, DocumentStore)> {
    init_tracing();
    [StorageKind::Sharded, StorageKind::Unified]
        .into_iter()
        .map(|kind| {
            let db: Arc<Database> = Database::builder().storage(kind).open().unwrap();
            (kind, DocumentStore::new(db))
        })
        .collect()
}

pub fn dt(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

pub fn doc(id: &str, title: &str, content: &str, author: &str, created: &str) -> Document {
    Document::new()
        .with_id(id)
        .with_title(title)
        .with_content(content)
        .with_author(Author::new(author))
        .with_created(dt(created))
}

/// Sorted ids of a result set
pub fn ids(results: &[Document]) -> Vec<String> {
    let mut ids: Vec<String> = results
        .iter()
        .filter_map(|d| d.id_str().map(str::to_string))
        .collect();
    ids.sort();
    ids
}

pub fn search(docs: &DocumentStore, request: SearchRequest) -> Vec<String> {
    ids(&docs.search(&request))
}
