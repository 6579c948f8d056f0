use spotter_core::FindSpot;

use crate::Pattern;

fn compile(wildcard: &str) -> Pattern {
    Pattern::compile(wildcard).expect("pattern should compile")
}

#[test]
fn star_only_patterns_match_everything() {
    for wildcard in ["", "*", "**", "****"] {
        let p = compile(wildcard);
        assert!(p.is_match_all(), "{wildcard:?}");
        assert!(p.matches(""));
        assert!(p.matches("anything at all"));
        assert!(p.matches_optional(None));
    }
    let p = Pattern::match_all();
    assert!(p.is_match_all());
    assert_eq!(p.original(), None);
    assert!(p.matches_optional(None));
}

#[test]
fn literal_patterns_compile() {
    for wildcard in ["eta", "et*o", "?etator", r"a\*b", "grüße"] {
        assert!(Pattern::compile(wildcard).is_ok(), "{wildcard:?}");
    }
}

#[test]
fn absent_input_only_matches_match_all() {
    assert!(!compile("x").matches_optional(None));
    assert!(compile("x").matches_optional(Some("x")));
}

#[test]
fn full_string_match_is_case_sensitive() {
    let p = compile("X");
    assert!(p.matches("X"));
    assert!(!p.matches("x"));
    assert!(!p.matches("XX"));
    assert!(!p.matches(""));
}

#[test]
fn wildcards_in_full_match() {
    assert!(compile("W*r").matches("Wetator"));
    assert!(compile("W?tator").matches("Wetator"));
    assert!(!compile("W?ator").matches("Wetator"));
    assert!(compile("a*b").matches("a\nb"));
}

#[test]
fn escapes_in_full_match() {
    assert!(compile(r"a\*b").matches("a*b"));
    assert!(!compile(r"a\*b").matches("axxb"));
    assert!(compile(r"what\?").matches("what?"));
    assert!(!compile(r"what\?").matches("whats"));
    assert!(compile("a.b").matches("a.b"));
    assert!(!compile("a.b").matches("axb"));
    assert!(compile("<b>[x]").matches("<b>[x]"));
    assert!(compile(r"C:\").matches(r"C:\"));
    assert!(compile(r"\a").matches("a"));
}

#[test]
fn matches_at_end() {
    assert!(compile("?etator").matches_at_end("Wetator"));
    assert!(!compile("?Wetator").matches_at_end("Wetator"));
    assert!(compile("tor").matches_at_end("Wetator"));
    assert!(!compile("tat").matches_at_end("Wetator"));
    assert!(!compile("x").matches_at_end(""));
    assert!(compile("*").matches_at_end("abc"));
    assert!(compile("*").matches_at_end(""));
    assert!(compile("").matches_at_end(""));
}

#[test]
fn shortest_match_at_end() {
    assert_eq!(
        compile("Name").shortest_match_at_end("Your Name"),
        Some(FindSpot::new(5, 9))
    );
    assert_eq!(compile("*.pdf").shortest_match_at_end("report.pdf"), Some(FindSpot::new(6, 10)));
    assert_eq!(compile("*.pdf").chars_before_shortest_match_at_end("report.pdf"), Some(6));
    assert_eq!(compile("x").shortest_match_at_end("abc"), None);
    assert_eq!(compile("x").shortest_match_at_end(""), Some(FindSpot::NOT_FOUND));
}

#[test]
fn first_occurrence() {
    let s = "Wetator";
    assert_eq!(compile("eta").first_occurrence(s), Some(FindSpot::new(1, 4)));
    assert_eq!(compile("t").first_occurrence(s), Some(FindSpot::new(2, 3)));
    assert_eq!(compile("t").first_occurrence_from(s, 3), Some(FindSpot::new(4, 5)));
    assert_eq!(compile("xyz").first_occurrence(s), None);
}

#[test]
fn first_occurrence_is_shortest_for_each_begin() {
    assert_eq!(compile("*a*").first_occurrence("xxa"), Some(FindSpot::new(0, 3)));
    assert_eq!(compile("e*t").first_occurrence("Wetator"), Some(FindSpot::new(1, 3)));
}

#[test]
fn occurrence_preconditions() {
    assert_eq!(compile("x").first_occurrence(""), Some(FindSpot::NOT_FOUND));
    assert_eq!(compile("*").first_occurrence(""), Some(FindSpot::NOT_FOUND));
    assert_eq!(compile("*").first_occurrence("abc"), Some(FindSpot::empty_at(0)));
    assert_eq!(compile("x").last_occurrence(""), Some(FindSpot::NOT_FOUND));
    assert_eq!(compile("*").last_occurrence("abc"), Some(FindSpot::empty_at(0)));
}

#[test]
fn last_occurrence() {
    let s = "Wetator";
    assert_eq!(compile("et*o").last_occurrence(s), Some(FindSpot::new(1, 6)));
    assert_eq!(compile("t").last_occurrence(s), Some(FindSpot::new(4, 5)));
    assert_eq!(compile("q").last_occurrence(s), None);
}

#[test]
fn character_counts() {
    let s = "Wetator";
    assert_eq!(compile("Wet").chars_after_last_occurrence(s), Some(4));
    assert_eq!(compile("tat").chars_before_first_occurrence(s), Some(2));
    assert_eq!(compile("t").chars_before_last_occurrence(s), Some(4));
    assert_eq!(compile("et*o").surrounding_chars(s), Some(2));
    assert_eq!(compile("et*o").matching_chars(s), Some(5));
    assert_eq!(compile("Wetator").surrounding_chars(s), Some(0));
}

#[test]
fn character_counts_without_match() {
    let s = "Wetator";
    let p = compile("xyz");
    assert_eq!(p.chars_before_first_occurrence(s), None);
    assert_eq!(p.chars_before_last_occurrence(s), None);
    assert_eq!(p.chars_after_last_occurrence(s), None);
    assert_eq!(p.surrounding_chars(s), None);
    assert_eq!(p.matching_chars(s), None);
    assert_eq!(p.chars_before_first_occurrence(""), None);
}

#[test]
fn character_counts_for_match_all() {
    let p = compile("*");
    assert_eq!(p.chars_before_first_occurrence("abc"), Some(0));
    assert_eq!(p.chars_after_last_occurrence("abc"), Some(0));
    assert_eq!(p.surrounding_chars("abc"), Some(0));
    assert_eq!(p.matching_chars("abc"), Some(0));
    assert_eq!(p.chars_before_shortest_match_at_end("abc"), Some(0));
}

#[test]
fn multibyte_offsets_stay_on_char_boundaries() {
    let s = "grüße";
    let spot = compile("ü?").first_occurrence(s).unwrap();
    assert_eq!(spot, FindSpot::new(2, 6));
    assert_eq!(&s[spot.range()], "üß");
    assert_eq!(compile("e").chars_before_last_occurrence(s), Some(6));
}

#[test]
fn debug_shows_sources() {
    let p = compile("a*");
    assert_eq!(p.internal_form(), "a.*");
    assert_eq!(
        format!("{p:?}"),
        r#"Pattern { original: Some("a*"), internal: "a.*", match_all: false }"#
    );
}

#[test]
fn patterns_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pattern>();
}
