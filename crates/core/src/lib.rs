//! Core types and traits for Docstore
//!
//! This crate defines the foundational types used throughout the system:
//! - DocumentId: Identity of a stored document, generated as UUID v4 when absent
//! - Document / Author: The record shape held by the store
//! - SearchRequest: Multi-criteria query and its predicate logic
//! - Error: Error type hierarchy
//! - Traits: Storage contract implemented by the storage crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod search_types;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use search_types::SearchRequest;
pub use traits::Storage;
pub use types::{Author, Document, DocumentId};
