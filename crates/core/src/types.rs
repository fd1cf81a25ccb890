//! Core types for Docstore
//!
//! This module defines the record shape held by the store:
//! - DocumentId: Identity of a document (caller-supplied or UUID v4)
//! - Author: Value type embedded in a document
//! - Document: The stored record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Identity of a stored document
///
/// Callers may supply any string. When they do not (or supply an empty
/// string) the store assigns one via [`DocumentId::generate`]. Collisions
/// between generated ids are treated as negligible and are not re-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a DocumentId from a caller-supplied string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identity: a UUID v4 rendered as hyphenated text
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the identity is the empty string (treated as unassigned)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets maps keyed by DocumentId be queried with &str
impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Author of a document
///
/// Authors have no lifecycle of their own; they travel embedded in a
/// [`Document`] and search compares them by `id` only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    /// Author identifier
    pub id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Author {
    /// Create an author with an id and no name
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Builder: set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A stored record
///
/// Every field except `id` and `created` is replaced wholesale by each
/// upsert. Absent and empty are distinct: `title: None` is "no title",
/// `title: Some(String::new())` is an empty title.
///
/// # Example
///
/// ```
/// use docstore_core::{Author, Document};
///
/// let doc = Document::new()
///     .with_title("Java Tasks")
///     .with_content("Some content")
///     .with_author(Author::new("a1"));
///
/// assert!(doc.id.is_none());
/// assert_eq!(doc.title.as_deref(), Some("Java Tasks"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Identity; assigned by the store when absent or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Embedded author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Creation time; frozen by the first upsert under an identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Create an empty document (no id, no fields)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the identity
    pub fn with_id(mut self, id: impl Into<DocumentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Builder: set the author
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Builder: set the creation time
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Identity as a string slice, if assigned and non-empty
    pub fn id_str(&self) -> Option<&str> {
        self.id
            .as_ref()
            .map(DocumentId::as_str)
            .filter(|id| !id.is_empty())
    }
}
