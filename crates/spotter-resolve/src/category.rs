//! Control categories: which elements a command may act on.

use std::fmt;

use spotter_core::{Document, InputType, NodeId, Tag};

use crate::weight::FoundBy;

/// The kind of interaction a query is resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlCategory {
    /// Takes typed text: text-like inputs, file inputs, textareas.
    Settable,
    /// Buttons, links, images, checkables and anything with a click handler.
    Clickable,
    /// Options, checkboxes and radios.
    Selectable,
    /// Options of a multi-select and checkboxes.
    Deselectable,
    /// Any displayed element.
    Other,
}

impl ControlCategory {
    /// Whether `node` is an element this category acts on. Hidden and inert
    /// elements are never admitted.
    pub fn admits(self, doc: &Document, node: NodeId) -> bool {
        let Some(element) = doc.element(node) else {
            return false;
        };
        if !element.is_displayed() || element.is_inert() {
            return false;
        }
        let input = element.input_type();

        match self {
            Self::Settable => {
                element.tag() == Tag::Textarea
                    || input.is_some_and(|t| t.is_text_bearing() || t == InputType::File)
            }
            Self::Clickable => {
                matches!(element.tag(), Tag::Button | Tag::A | Tag::Img)
                    || input.is_some_and(|t| t.is_button_like() || t.is_checkable())
                    || element.has_attr("onclick")
                    || element.attr("role") == Some("button")
            }
            Self::Selectable => {
                element.tag() == Tag::Option || input.is_some_and(InputType::is_checkable)
            }
            Self::Deselectable => match element.tag() {
                Tag::Option => doc
                    .ancestors(node)
                    .find(|&a| doc.tag(a) == Some(Tag::Select))
                    .and_then(|select| doc.element(select))
                    .is_some_and(|select| select.has_attr("multiple")),
                _ => input == Some(InputType::Checkbox),
            },
            Self::Other => true,
        }
    }

    /// Identification strategies tried for this category, in rank order.
    pub fn strategies(self) -> &'static [FoundBy] {
        use FoundBy::*;
        match self {
            Self::Settable => &[
                Id,
                LabelElement,
                AriaLabel,
                Name,
                Title,
                Placeholder,
                LabelTextBefore,
            ],
            Self::Clickable => &[
                Id,
                LabelElement,
                AriaLabel,
                Text,
                Name,
                Title,
                ImageAlt,
                ImageTitle,
                ImageSource,
                LabelTextAfter,
            ],
            Self::Selectable | Self::Deselectable => &[
                Id,
                LabelElement,
                AriaLabel,
                Text,
                Name,
                Title,
                LabelTextAfter,
                LabelTextBefore,
            ],
            Self::Other => &[Id, AriaLabel, Text, Name, Title, ImageAlt, ImageTitle],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Settable => "settable",
            Self::Clickable => "clickable",
            Self::Selectable => "selectable",
            Self::Deselectable => "deselectable",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ControlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
