use spotter_pattern::PatternCache;

use crate::{Query, WPath};

fn compile(source: &str) -> Query {
    Query::compile(&WPath::parse(source)).unwrap()
}

#[test]
fn path_segments_join_into_one_pattern() {
    let query = compile("Search > Form > Name");

    assert_eq!(query.path_pattern().and_then(|p| p.original()), Some("Search*Form"));
    assert_eq!(query.target_pattern().and_then(|p| p.original()), Some("Name"));
    assert!(query.is_discriminating());
    assert_eq!(query.to_string(), "Search > Form > Name");
}

#[test]
fn single_segment_has_no_path() {
    let query = compile("Name");
    assert!(query.path_pattern().is_none());
    assert!(query.target_pattern().is_some());
}

#[test]
fn discriminating_criteria() {
    assert!(!compile("").is_discriminating());
    assert!(!compile("*").is_discriminating());
    assert!(!compile("* > **").is_discriminating());
    assert!(compile("* > x").is_discriminating());
    assert!(compile(r"\*").is_discriminating());
    assert!(compile("?").is_discriminating());

    let empty = compile("");
    assert!(empty.path_pattern().is_none());
    assert!(empty.target_pattern().is_none());
}

#[test]
fn cached_compilation_shares_patterns() {
    let mut cache = PatternCache::new();
    Query::compile_cached(&WPath::parse("A > Name"), &mut cache).unwrap();
    Query::compile_cached(&WPath::parse("B > Name"), &mut cache).unwrap();

    assert_eq!(cache.len(), 3);
}
