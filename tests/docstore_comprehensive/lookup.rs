//! Lookup Tests

use super::*;

#[test]
fn test_find_by_id_returns_stored_document() {
    let docs = store();
    let saved = docs.upsert(doc("x", "Title", "Body", "a1", "2024-01-01T00:00:00Z"));
    assert_eq!(docs.find_by_id("x"), Some(saved));
}

#[test]
fn test_find_by_id_missing_is_none() {
    let docs = store();
    assert!(docs.find_by_id("nonexistent").is_none());
    assert!(docs.find_by_id("").is_none());
    assert!(!docs.exists("nonexistent"));
}

#[test]
fn test_find_by_id_sees_latest_write() {
    let docs = store();
    docs.upsert(Document::new().with_id("v").with_title("one"));
    docs.upsert(Document::new().with_id("v").with_title("two"));
    assert_eq!(docs.find_by_id("v").unwrap().title.as_deref(), Some("two"));
}
