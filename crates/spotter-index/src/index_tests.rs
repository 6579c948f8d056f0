use indoc::indoc;
use spotter_core::Document;

use crate::{DocumentIndex, IndexError};

fn by_id(doc: &Document, id: &str) -> spotter_core::NodeId {
    doc.find_by_id(id)
        .unwrap_or_else(|| panic!("no element #{id}"))
}

#[test]
fn label_before_stops_at_previous_control() {
    let doc = Document::parse_html(indoc! {r#"
        <form>
          Name: <input id="name" value="Anna">
          Email: <input id="email">
        </form>
    "#});
    let index = DocumentIndex::build(&doc);
    let name = by_id(&doc, "name");
    let email = by_id(&doc, "email");

    assert_eq!(index.label_text_before(email, 0).unwrap(), "Email:");
    assert_eq!(index.label_text_before(name, 0).unwrap(), "Name:");
    assert_eq!(index.text_before(email).unwrap(), "Name: Anna Email:");
}

#[test]
fn label_before_skips_adjacent_controls() {
    let doc = Document::parse_html(indoc! {r#"
        <form>
          Options: <input type="checkbox" id="a"><input type="checkbox" id="b">
        </form>
    "#});
    let index = DocumentIndex::build(&doc);

    assert_eq!(index.label_text_before(by_id(&doc, "b"), 0).unwrap(), "Options:");
}

#[test]
fn label_before_stays_inside_the_form() {
    let doc = Document::parse_html(indoc! {r#"
        <form id="f1"><p>First</p></form>
        <form id="f2">Second <input id="b"></form>
    "#});
    let index = DocumentIndex::build(&doc);

    assert_eq!(index.label_text_before(by_id(&doc, "b"), 0).unwrap(), "Second");
}

#[test]
fn label_before_stops_at_body() {
    let doc = Document::parse_html(indoc! {r#"
        <html><head><title>Title text</title></head>
        <body><p>Search the shop</p> Term <input id="q"></body></html>
    "#});
    let index = DocumentIndex::build(&doc);

    assert_eq!(
        index.label_text_before(by_id(&doc, "q"), 0).unwrap(),
        "Search the shop Term"
    );
}

#[test]
fn label_before_honors_min_start() {
    let doc = Document::parse_html(r#"<p>Your</p> name <input id="n">"#);
    let index = DocumentIndex::build(&doc);
    let min_start = index.text_without_form_controls().find("name").unwrap();

    assert_eq!(index.label_text_before(by_id(&doc, "n"), min_start).unwrap(), "name");
    assert_eq!(index.label_text_before(by_id(&doc, "n"), 0).unwrap(), "Your name");
}

#[test]
fn label_before_of_a_wrapped_control() {
    let doc = Document::parse_html(r#"<label>Street <input id="s" value="Main"></label>"#);
    let index = DocumentIndex::build(&doc);

    assert_eq!(index.label_text_before(by_id(&doc, "s"), 0).unwrap(), "Street");
}

#[test]
fn label_after() {
    let doc = Document::parse_html(indoc! {r#"
        <form>
          <input type="checkbox" id="c"> Remember me
          <input type="submit" value="Go">
          <input id="last"> trailing
        </form>
        <p>outside</p>
    "#});
    let index = DocumentIndex::build(&doc);

    assert_eq!(index.label_text_after(by_id(&doc, "c")).unwrap(), "Remember me");
    assert_eq!(index.label_text_after(by_id(&doc, "last")).unwrap(), "trailing");
}

#[test]
fn text_of_before_and_after() {
    let doc = Document::parse_html(r#"<p>one</p><p id="two">two</p><p>three</p>"#);
    let index = DocumentIndex::build(&doc);
    let two = by_id(&doc, "two");

    assert_eq!(index.text(), "one two three");
    assert_eq!(index.text_of(two).unwrap(), "two");
    assert_eq!(index.text_before(two).unwrap(), "one");
    assert_eq!(index.text_after(two).unwrap(), "three");
}

#[test]
fn empty_text_is_not_an_error() {
    let doc = Document::parse_html(r#"<div id="e"></div>"#);
    let index = DocumentIndex::build(&doc);
    let empty = by_id(&doc, "e");

    assert_eq!(index.text_of(empty), Ok(""));
    assert_eq!(index.text_before(empty), Ok(""));
    assert_eq!(index.label_text_before(empty, 0), Ok(""));
}

#[test]
fn nodes_outside_the_index() {
    let doc = Document::parse_html(r#"<div id="inside">in</div><div id="outside">out</div>"#);
    let inside = by_id(&doc, "inside");
    let outside = by_id(&doc, "outside");
    let index = DocumentIndex::build_from(&doc, inside);

    assert_eq!(index.text(), "in");
    assert_eq!(index.root(), inside);
    assert!(!index.contains(outside));
    assert_eq!(index.text_of(outside), Err(IndexError::NodeNotIndexed(outside)));
    assert_eq!(index.position(outside), Err(IndexError::NodeNotIndexed(outside)));
    assert_eq!(
        index.label_text_before(outside, 0),
        Err(IndexError::NodeNotIndexed(outside))
    );
}

#[test]
fn nodes_in_document_order() {
    let doc = Document::parse_html(r#"<p id="a">a</p><p id="b">b</p>"#);
    let index = DocumentIndex::build(&doc);
    let a = by_id(&doc, "a");
    let b = by_id(&doc, "b");

    assert_eq!(index.nodes().next(), Some(doc.root()));
    assert_eq!(index.len(), doc.descendants(doc.root()).len());
    assert!(index.position(a).unwrap() < index.position(b).unwrap());
    assert!(index.nodes().eq(doc.descendants(doc.root())));
}
