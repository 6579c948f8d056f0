//! Element payload of a document node.

use indexmap::IndexMap;

use crate::document::NodeId;
use crate::tag::{InputType, Tag, TextTransform};

/// An element: kind, attributes and the rendering facts the locator needs.
#[derive(Debug, Clone)]
pub struct Element {
    tag: Tag,
    /// Lower-case local name, kept for `Tag::Other` and for dumps.
    name: String,
    attributes: IndexMap<String, String>,
    displayed: bool,
    text_transform: Option<TextTransform>,
    /// Root of the nested document shown by a frame.
    frame_content: Option<NodeId>,
}

impl Element {
    /// Create an element. Visibility and text transform are derived from the
    /// `hidden` attribute and the inline `style`.
    pub fn new<K, V>(name: &str, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let attributes: IndexMap<String, String> = attributes
            .into_iter()
            .map(|(k, v)| (k.into().to_ascii_lowercase(), v.into()))
            .collect();

        let style = attributes.get("style").map(|s| parse_style(s));
        let hidden_by_style = style.as_ref().is_some_and(|decls| {
            decls.iter().any(|(prop, value)| {
                (prop == "display" && value == "none")
                    || (prop == "visibility" && value == "hidden")
            })
        });
        let text_transform = style.as_ref().and_then(|decls| {
            decls
                .iter()
                .find(|(prop, _)| prop == "text-transform")
                .and_then(|(_, value)| TextTransform::from_css(value))
        });

        Self {
            tag: Tag::from_name(name),
            name: name.to_ascii_lowercase(),
            displayed: !attributes.contains_key("hidden") && !hidden_by_style,
            attributes,
            text_transform,
            frame_content: None,
        }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self.attributes.get(name) {
            Some(value) => Some(value.as_str()),
            None => self
                .attributes
                .get(&name.to_ascii_lowercase())
                .map(String::as_str),
        }
    }

    /// Attribute value, treating empty values as absent.
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.into());
    }

    #[inline]
    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    pub(crate) fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    #[inline]
    pub fn text_transform(&self) -> Option<TextTransform> {
        self.text_transform
    }

    pub fn set_text_transform(&mut self, transform: Option<TextTransform>) {
        self.text_transform = transform;
    }

    #[inline]
    pub fn frame_content(&self) -> Option<NodeId> {
        self.frame_content
    }

    pub(crate) fn set_frame_content(&mut self, root: NodeId) {
        self.frame_content = Some(root);
    }

    /// Input type, for `<input>` elements only.
    pub fn input_type(&self) -> Option<InputType> {
        (self.tag == Tag::Input).then(|| InputType::from_attr(self.attr("type")))
    }

    /// Kinds that emit nothing into the indexed text.
    pub fn is_hidden_kind(&self) -> bool {
        self.is_inert() || self.input_type() == Some(InputType::File)
    }

    /// Kinds a user can neither see nor act on. File inputs show no text
    /// but still take input.
    pub fn is_inert(&self) -> bool {
        self.tag.is_non_visual() || self.input_type() == Some(InputType::Hidden)
    }

    /// Controls whose value is sent when the enclosing form is submitted.
    pub fn is_submittable(&self) -> bool {
        match self.tag {
            Tag::Button | Tag::Select | Tag::Textarea => true,
            Tag::Input => self.input_type() != Some(InputType::Hidden),
            _ => false,
        }
    }
}

/// Split an inline style into lower-cased `(property, value)` pairs.
fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let value = value.trim().trim_end_matches("!important").trim();
            Some((prop.trim().to_ascii_lowercase(), value.to_ascii_lowercase()))
        })
        .collect()
}
