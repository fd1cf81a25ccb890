//! Search request and its predicate logic
//!
//! A [`SearchRequest`] holds up to five independent criteria groups. A
//! document matches when it satisfies every group that is present (AND);
//! inside a list group any one alternative is enough (OR). A group that is
//! `None` is vacuously satisfied.
//!
//! A document lacking the field an active group inspects fails that group.
//! This includes `created`: with either date bound set, a document without
//! a creation time never matches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Document;

/// Multi-criteria document query
///
/// # Examples
///
/// ```
/// use docstore_core::{Document, SearchRequest};
///
/// let req = SearchRequest::new()
///     .with_title_prefixes(["Java"])
///     .with_contains_contents(["Stream"]);
///
/// let doc = Document::new()
///     .with_title("Java Streams")
///     .with_content("Stream API basics");
///
/// assert!(req.matches(&doc));
/// assert!(!SearchRequest::new().with_title_prefixes(["Rust"]).matches(&doc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Title must start with at least one of these
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_prefixes: Option<Vec<String>>,

    /// Content must contain at least one of these (case-sensitive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_contents: Option<Vec<String>>,

    /// Author id must be one of these
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_ids: Option<Vec<String>>,

    /// Inclusive lower bound on `created`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,

    /// Inclusive upper bound on `created`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Create an empty request (matches every document)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the title-prefix group
    pub fn with_title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: set the content-substring group
    pub fn with_contains_contents<I, S>(mut self, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contains_contents = Some(contents.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: set the author-id group
    pub fn with_author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.author_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: set the inclusive lower bound on `created`
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.created_from = Some(from);
        self
    }

    /// Builder: set the inclusive upper bound on `created`
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.created_to = Some(to);
        self
    }

    /// True if no group is active
    pub fn is_empty(&self) -> bool {
        self.title_prefixes.is_none()
            && self.contains_contents.is_none()
            && self.author_ids.is_none()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }

    /// Check whether a document satisfies every active group
    pub fn matches(&self, document: &Document) -> bool {
        self.matches_title(document)
            && self.matches_content(document)
            && self.matches_author(document)
            && self.matches_created_from(document)
            && self.matches_created_to(document)
    }

    fn matches_title(&self, document: &Document) -> bool {
        let Some(prefixes) = &self.title_prefixes else {
            return true;
        };
        let Some(title) = document.title.as_deref() else {
            return false;
        };
        prefixes.iter().any(|prefix| title.starts_with(prefix.as_str()))
    }

    fn matches_content(&self, document: &Document) -> bool {
        let Some(needles) = &self.contains_contents else {
            return true;
        };
        let Some(content) = document.content.as_deref() else {
            return false;
        };
        needles.iter().any(|needle| content.contains(needle.as_str()))
    }

    fn matches_author(&self, document: &Document) -> bool {
        let Some(ids) = &self.author_ids else {
            return true;
        };
        let Some(author) = &document.author else {
            return false;
        };
        ids.iter().any(|id| *id == author.id)
    }

    fn matches_created_from(&self, document: &Document) -> bool {
        match (self.created_from, document.created) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(from), Some(created)) => created >= from,
        }
    }

    fn matches_created_to(&self, document: &Document) -> bool {
        match (self.created_to, document.created) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(to), Some(created)) => created <= to,
        }
    }
}
