//! Search Tests
//!
//! - Each active group narrows the result (AND across groups)
//! - Alternatives inside a group widen it (OR within a group)
//! - Date bounds are inclusive; absent fields never satisfy an active group

use super::*;
use serde_json::json;

/// Five documents where exactly a, b and c satisfy the combined query
fn seeded() -> DocumentStore {
    let docs = store();
    docs.upsert_all(vec![
        doc("a", "Java Streams", "Stream API basics", "author1", "2025-01-15T00:00:00Z"),
        doc("b", "Java Collections", "Using Stream on lists", "author1", "2024-12-01T00:00:00Z"),
        doc("c", "Java Tips", "Parallel Stream pitfalls", "author1", "2025-12-31T00:00:00Z"),
        doc("d", "Java Legacy", "Stream of old code", "author2", "2025-02-01T00:00:00Z"),
        doc("e", "Python Tasks", "Stream processing", "author1", "2025-03-01T00:00:00Z"),
    ]);
    docs
}

fn combined() -> SearchRequest {
    SearchRequest::new()
        .with_title_prefixes(["Java"])
        .with_contains_contents(["Stream"])
        .with_author_ids(["author1"])
        .created_from(dt("2024-12-01T00:00:00Z"))
        .created_to(dt("2025-12-31T00:00:00Z"))
}

#[test]
fn test_title_prefix_filter() {
    let docs = store();
    docs.upsert(Document::new().with_title("Java Tasks"));
    docs.upsert(Document::new().with_title("Python Tasks"));

    let hits = docs.search(&SearchRequest::new().with_title_prefixes(["Java"]));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title.as_deref(), Some("Java Tasks"));
}

#[test]
fn test_combined_query_on_both_store_kinds() {
    for (kind, docs) in stores() {
        docs.upsert_all(seeded().search(&SearchRequest::new()));
        assert_eq!(search(&docs, combined()), vec!["a", "b", "c"], "{kind:?}");
    }
}

#[test]
fn test_combined_is_intersection_of_single_groups() {
    let docs = seeded();
    assert_eq!(
        search(&docs, SearchRequest::new().with_title_prefixes(["Java"])),
        vec!["a", "b", "c", "d"]
    );
    assert_eq!(
        search(&docs, SearchRequest::new().with_author_ids(["author1"])),
        vec!["a", "b", "c", "e"]
    );
    assert_eq!(search(&docs, combined()), vec!["a", "b", "c"]);
}

#[test]
fn test_alternatives_are_ored() {
    let docs = seeded();
    let hits = search(
        &docs,
        SearchRequest::new().with_title_prefixes(["Python", "Java Tips"]),
    );
    assert_eq!(hits, vec!["c", "e"]);
}

#[test]
fn test_prefix_and_substring_are_case_sensitive() {
    let docs = seeded();
    assert!(search(&docs, SearchRequest::new().with_title_prefixes(["java"])).is_empty());
    assert!(search(&docs, SearchRequest::new().with_contains_contents(["stream"])).is_empty());
}

#[test]
fn test_date_bounds_are_inclusive() {
    let docs = seeded();
    let t = dt("2024-12-01T00:00:00Z");
    assert_eq!(
        search(&docs, SearchRequest::new().created_from(t).created_to(t)),
        vec!["b"]
    );
}

#[test]
fn test_inverted_range_matches_nothing() {
    let docs = seeded();
    let request = SearchRequest::new()
        .created_from(dt("2026-01-01T00:00:00Z"))
        .created_to(dt("2024-01-01T00:00:00Z"));
    assert!(docs.search(&request).is_empty());
}

#[test]
fn test_empty_request_returns_everything() {
    let docs = seeded();
    assert_eq!(search(&docs, SearchRequest::new()), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_empty_alternative_list_matches_nothing() {
    let docs = seeded();
    let request = SearchRequest::new().with_author_ids(Vec::<String>::new());
    assert!(docs.search(&request).is_empty());
}

#[test]
fn test_absent_fields_fail_active_groups() {
    let docs = store();
    docs.upsert(Document::new().with_id("bare"));

    assert!(docs.search(&SearchRequest::new().with_title_prefixes([""])).is_empty());
    assert!(docs.search(&SearchRequest::new().with_contains_contents([""])).is_empty());
    assert!(docs.search(&SearchRequest::new().with_author_ids([""])).is_empty());
    assert_eq!(search(&docs, SearchRequest::new()), vec!["bare"]);
}

#[test]
fn test_search_returns_snapshots() {
    let docs = seeded();
    let mut hits = docs.search(&SearchRequest::new().with_author_ids(["author2"]));
    hits[0].title = Some("mutated".to_string());
    assert_eq!(docs.find_by_id("d").unwrap().title.as_deref(), Some("Java Legacy"));
}

#[test]
fn test_search_value_matches_typed_request() {
    let docs = seeded();
    let hits = docs
        .search_value(json!({
            "titlePrefixes": ["Java"],
            "containsContents": ["Stream"],
            "authorIds": ["author1"],
            "createdFrom": "2024-12-01T00:00:00Z",
            "createdTo": "2025-12-31T00:00:00Z"
        }))
        .unwrap();
    assert_eq!(ids(&hits), vec!["a", "b", "c"]);
}

#[test]
fn test_search_value_rejects_non_object() {
    let docs = seeded();
    let err = docs.search_value(json!(["Java"])).unwrap_err();
    assert!(err.is_invalid_argument());
}
