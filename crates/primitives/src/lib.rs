//! Primitives layer for Docstore
//!
//! Provides the document primitive as a stateless facade over the Database:
//! - **DocumentStore**: upsert with creation-time preservation, filtered
//!   search, lookup by identity
//!
//! ## Design Principle: Stateless Facades
//!
//! `DocumentStore` holds only an `Arc<Database>`. Multiple instances on the
//! same Database see the same documents.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document_store;

pub use document_store::DocumentStore;
