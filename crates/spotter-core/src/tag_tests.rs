use crate::{InputType, Tag, TextTransform};

#[test]
fn tag_names_are_case_insensitive() {
    assert_eq!(Tag::from_name("DIV"), Tag::Div);
    assert_eq!(Tag::from_name("Select"), Tag::Select);
    assert_eq!(Tag::from_name("h3"), Tag::Heading(3));
}

#[test]
fn unknown_tags_are_other() {
    assert_eq!(Tag::from_name("span"), Tag::Other);
    assert_eq!(Tag::from_name("my-widget"), Tag::Other);
    assert!(!Tag::Other.is_block());
}

#[test]
fn block_kinds() {
    assert!(Tag::Div.is_block());
    assert!(Tag::Td.is_block());
    assert!(Tag::Heading(1).is_block());
    assert!(!Tag::A.is_block());
    assert!(!Tag::Label.is_block());
}

#[test]
fn input_type_defaults_to_text() {
    assert_eq!(InputType::from_attr(None), InputType::Text);
    assert_eq!(InputType::from_attr(Some("")), InputType::Text);
    assert_eq!(InputType::from_attr(Some(" CHECKBOX ")), InputType::Checkbox);
    assert_eq!(InputType::from_attr(Some("email")), InputType::Other);
}

#[test]
fn input_type_groups() {
    assert!(InputType::Submit.is_button_like());
    assert!(InputType::Image.is_button_like());
    assert!(InputType::Radio.is_checkable());
    assert!(InputType::Other.is_text_bearing());
    assert!(!InputType::Hidden.is_text_bearing());
}

#[test]
fn text_transform_capitalize() {
    let transform = TextTransform::from_css("capitalize").unwrap();
    assert_eq!(transform.apply("hello  big world"), "Hello  Big World");
    assert_eq!(TextTransform::Uppercase.apply("ab"), "AB");
    assert_eq!(TextTransform::from_css("none"), None);
}
