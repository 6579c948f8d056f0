use indoc::indoc;
use spotter_core::Document;

use crate::ControlCategory::{self, *};

fn admitted(doc: &Document, category: ControlCategory) -> Vec<String> {
    doc.descendants(doc.root())
        .into_iter()
        .filter(|&n| category.admits(doc, n))
        .filter_map(|n| doc.element(n)?.attr("id").map(str::to_owned))
        .collect()
}

fn fixture() -> Document {
    Document::parse_html(indoc! {r#"
        <div id="wrap" onclick="go()">
          <input id="text">
          <input id="mail" type="email">
          <input id="pass" type="password">
          <input id="upload" type="file">
          <input id="secret" type="hidden">
          <input id="gone" style="display:none">
          <textarea id="notes"></textarea>
          <input id="check" type="checkbox">
          <input id="radio" type="radio">
          <input id="submit" type="submit">
          <button id="button">Go</button>
          <a id="link" href="/">Home</a>
          <img id="image" src="x.png">
          <span id="fake" role="button">Fake</span>
          <select id="single"><option id="one">1</option></select>
          <select id="multi" multiple><option id="two">2</option></select>
        </div>
    "#})
}

#[test]
fn settable() {
    assert_eq!(
        admitted(&fixture(), Settable),
        ["text", "mail", "pass", "upload", "notes"]
    );
}

#[test]
fn clickable() {
    assert_eq!(
        admitted(&fixture(), Clickable),
        ["wrap", "check", "radio", "submit", "button", "link", "image", "fake"]
    );
}

#[test]
fn selectable_and_deselectable() {
    let doc = fixture();
    assert_eq!(admitted(&doc, Selectable), ["check", "radio", "one", "two"]);
    assert_eq!(admitted(&doc, Deselectable), ["check", "two"]);
}

#[test]
fn other_admits_displayed_elements_only() {
    let doc = fixture();
    let other = admitted(&doc, Other);
    assert!(other.contains(&"wrap".to_owned()));
    assert!(other.contains(&"single".to_owned()));
    assert!(!other.contains(&"secret".to_owned()));
    assert!(!other.contains(&"gone".to_owned()));
}

#[test]
fn text_nodes_are_never_admitted() {
    let mut doc = Document::new();
    let root = doc.root();
    let text = doc.append_text(root, "x");
    assert!(!Other.admits(&doc, text));
    assert!(!Other.admits(&doc, root));
}

#[test]
fn every_category_tries_id_first() {
    for category in [Settable, Clickable, Selectable, Deselectable, Other] {
        assert_eq!(category.strategies()[0], crate::FoundBy::Id);
        assert!(category.strategies().is_sorted());
    }
    assert_eq!(Settable.to_string(), "settable");
}
