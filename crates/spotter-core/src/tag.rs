//! Element kinds.
//!
//! The indexer and the resolver dispatch on these enums instead of on tag
//! name strings. Anything without special treatment is `Tag::Other`, which
//! indexes as inline content.

/// HTML element kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    A,
    Address,
    Article,
    Aside,
    Blockquote,
    Body,
    Br,
    Button,
    Caption,
    Center,
    Dd,
    Details,
    Dialog,
    Div,
    Dl,
    Dt,
    Fieldset,
    Figcaption,
    Figure,
    Footer,
    Form,
    Frame,
    Frameset,
    Head,
    /// `h1` through `h6`.
    Heading(u8),
    Header,
    Hr,
    Html,
    Iframe,
    Img,
    Input,
    Label,
    Legend,
    Li,
    Link,
    Main,
    Meta,
    Nav,
    Noscript,
    Ol,
    Optgroup,
    Option,
    P,
    Pre,
    Q,
    Script,
    Section,
    Select,
    Style,
    Summary,
    Table,
    Tbody,
    Td,
    Template,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Title,
    Tr,
    Ul,
    Other,
}

impl Tag {
    /// Map a local element name (case-insensitive) to its kind.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "a" => Self::A,
            "address" => Self::Address,
            "article" => Self::Article,
            "aside" => Self::Aside,
            "blockquote" => Self::Blockquote,
            "body" => Self::Body,
            "br" => Self::Br,
            "button" => Self::Button,
            "caption" => Self::Caption,
            "center" => Self::Center,
            "dd" => Self::Dd,
            "details" => Self::Details,
            "dialog" => Self::Dialog,
            "div" => Self::Div,
            "dl" => Self::Dl,
            "dt" => Self::Dt,
            "fieldset" => Self::Fieldset,
            "figcaption" => Self::Figcaption,
            "figure" => Self::Figure,
            "footer" => Self::Footer,
            "form" => Self::Form,
            "frame" => Self::Frame,
            "frameset" => Self::Frameset,
            "head" => Self::Head,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "header" => Self::Header,
            "hr" => Self::Hr,
            "html" => Self::Html,
            "iframe" => Self::Iframe,
            "img" => Self::Img,
            "input" => Self::Input,
            "label" => Self::Label,
            "legend" => Self::Legend,
            "li" => Self::Li,
            "link" => Self::Link,
            "main" => Self::Main,
            "meta" => Self::Meta,
            "nav" => Self::Nav,
            "noscript" => Self::Noscript,
            "ol" => Self::Ol,
            "optgroup" => Self::Optgroup,
            "option" => Self::Option,
            "p" => Self::P,
            "pre" => Self::Pre,
            "q" => Self::Q,
            "script" => Self::Script,
            "section" => Self::Section,
            "select" => Self::Select,
            "style" => Self::Style,
            "summary" => Self::Summary,
            "table" => Self::Table,
            "tbody" => Self::Tbody,
            "td" => Self::Td,
            "template" => Self::Template,
            "textarea" => Self::Textarea,
            "tfoot" => Self::Tfoot,
            "th" => Self::Th,
            "thead" => Self::Thead,
            "title" => Self::Title,
            "tr" => Self::Tr,
            "ul" => Self::Ul,
            _ => Self::Other,
        }
    }

    /// Block-level kinds are padded with blanks in the indexed text.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Self::Address
                | Self::Article
                | Self::Aside
                | Self::Blockquote
                | Self::Body
                | Self::Caption
                | Self::Center
                | Self::Dd
                | Self::Details
                | Self::Dialog
                | Self::Div
                | Self::Dl
                | Self::Dt
                | Self::Fieldset
                | Self::Figcaption
                | Self::Figure
                | Self::Footer
                | Self::Form
                | Self::Frameset
                | Self::Heading(_)
                | Self::Header
                | Self::Hr
                | Self::Html
                | Self::Li
                | Self::Main
                | Self::Nav
                | Self::Ol
                | Self::P
                | Self::Pre
                | Self::Section
                | Self::Summary
                | Self::Table
                | Self::Tbody
                | Self::Td
                | Self::Tfoot
                | Self::Th
                | Self::Thead
                | Self::Tr
                | Self::Ul
        )
    }

    /// Kinds that never contribute text, whatever their content.
    pub fn is_non_visual(self) -> bool {
        matches!(
            self,
            Self::Head
                | Self::Link
                | Self::Meta
                | Self::Noscript
                | Self::Script
                | Self::Style
                | Self::Template
                | Self::Title
        )
    }
}

/// Value of the `type` attribute of an `<input>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputType {
    Text,
    Password,
    Hidden,
    File,
    Submit,
    Reset,
    Button,
    Image,
    Checkbox,
    Radio,
    /// Any other type (email, number, date, ...). Text-bearing.
    Other,
}

impl InputType {
    /// Parse a `type` attribute value. A missing type means `text`.
    pub fn from_attr(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Text;
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Self::Text,
            "password" => Self::Password,
            "hidden" => Self::Hidden,
            "file" => Self::File,
            "submit" => Self::Submit,
            "reset" => Self::Reset,
            "button" => Self::Button,
            "image" => Self::Image,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            _ => Self::Other,
        }
    }

    /// Inputs rendered as push buttons.
    pub fn is_button_like(self) -> bool {
        matches!(self, Self::Submit | Self::Reset | Self::Button | Self::Image)
    }

    pub fn is_checkable(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    /// Inputs whose value is free text typed by the user.
    pub fn is_text_bearing(self) -> bool {
        matches!(self, Self::Text | Self::Password | Self::Other)
    }
}

/// Inherited `text-transform` style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransform {
    /// Parse a CSS `text-transform` value. `none` and unknown values yield `None`.
    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uppercase" => Some(Self::Uppercase),
            "lowercase" => Some(Self::Lowercase),
            "capitalize" => Some(Self::Capitalize),
            _ => None,
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
            Self::Capitalize => {
                let mut result = String::with_capacity(text.len());
                let mut at_word_start = true;
                for c in text.chars() {
                    if c.is_whitespace() {
                        at_word_start = true;
                        result.push(c);
                    } else if at_word_start {
                        result.extend(c.to_uppercase());
                        at_word_start = false;
                    } else {
                        result.push(c);
                    }
                }
                result
            }
        }
    }
}
