//! Linearization pass.
//!
//! Walks the tree once in pre-order. Each node reserves its span slot on
//! entry (fixing its document position), emits text according to its kind,
//! and closes the slot on exit. Two buffers grow in lockstep: the full text
//! and the text with form-control content left out.

use std::borrow::Cow;
use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use spotter_core::{Document, Element, FindSpot, InputType, NodeData, NodeId, Tag, TextTransform};

use crate::invariants::ensure_recorded;
use crate::normalized::NormalizedString;
use crate::options::IndexOptions;

/// Output of one pass.
#[derive(Debug)]
pub(crate) struct Built {
    pub text: NormalizedString,
    pub excluded: NormalizedString,
    pub spans: IndexMap<NodeId, FindSpot>,
    pub excluded_spans: IndexMap<NodeId, FindSpot>,
}

pub(crate) struct Builder<'d> {
    doc: &'d Document,
    options: IndexOptions,
    text: NormalizedString,
    excluded: NormalizedString,
    spans: IndexMap<NodeId, FindSpot>,
    excluded_spans: IndexMap<NodeId, FindSpot>,
    /// While > 0, nothing is appended to the excluded buffer.
    exclusion_depth: u32,
}

/// Start offsets reserved for a node, in both buffers.
#[derive(Clone, Copy)]
struct Slot {
    node: NodeId,
    start: usize,
    excluded_start: usize,
}

impl<'d> Builder<'d> {
    pub fn new(doc: &'d Document, options: IndexOptions) -> Self {
        Self {
            doc,
            options,
            text: NormalizedString::new(),
            excluded: NormalizedString::new(),
            spans: IndexMap::new(),
            excluded_spans: IndexMap::new(),
            exclusion_depth: 0,
        }
    }

    pub fn run(mut self, root: NodeId) -> Built {
        let inherited = self
            .doc
            .ancestors(root)
            .find_map(|a| self.doc.element(a).and_then(Element::text_transform));
        self.visit(root, inherited);
        Built {
            text: self.text,
            excluded: self.excluded,
            spans: self.spans,
            excluded_spans: self.excluded_spans,
        }
    }

    fn visit(&mut self, node: NodeId, transform: Option<TextTransform>) {
        let slot = self.open(node);
        if self.doc.is_displayed(node) {
            self.emit_node(node, transform);
        }
        self.close(slot);
    }

    fn open(&mut self, node: NodeId) -> Slot {
        let slot = Slot {
            node,
            start: self.text.len(),
            excluded_start: self.excluded.len(),
        };
        self.spans.insert(node, FindSpot::empty_at(slot.start));
        self.excluded_spans
            .insert(node, FindSpot::empty_at(slot.excluded_start));
        slot
    }

    fn close(&mut self, slot: Slot) {
        self.spans
            .insert(slot.node, FindSpot::new(slot.start, self.text.len()));
        self.excluded_spans.insert(
            slot.node,
            FindSpot::new(slot.excluded_start, self.excluded.len()),
        );
    }

    /// Move the recorded start of an already closed node back to `start`.
    fn patch_start(&mut self, node: NodeId, start: usize, excluded_start: usize) {
        let spot = ensure_recorded(&mut self.spans, node);
        *spot = spot.with_start(start);
        let spot = ensure_recorded(&mut self.excluded_spans, node);
        *spot = spot.with_start(excluded_start);
    }

    fn emit(&mut self, text: &str) {
        self.text.append(text);
        if self.exclusion_depth == 0 {
            self.excluded.append(text);
        }
    }

    fn blank(&mut self) {
        self.text.append_blank();
        if self.exclusion_depth == 0 {
            self.excluded.append_blank();
        }
    }

    /// Append to both buffers, even inside a form control.
    fn emit_always(&mut self, text: &str) {
        self.text.append(text);
        self.excluded.append(text);
    }

    fn blank_always(&mut self) {
        self.text.append_blank();
        self.excluded.append_blank();
    }

    /// Leave form-control content out of the excluded buffer until the
    /// returned guard drops.
    fn excluding_form_controls(&mut self) -> Excluding<'_, 'd> {
        self.exclusion_depth += 1;
        Excluding { builder: self }
    }

    fn emit_node(&mut self, node: NodeId, transform: Option<TextTransform>) {
        let doc = self.doc;
        match doc.data(node) {
            NodeData::Document => self.visit_children(node, transform),
            NodeData::Doctype(_) | NodeData::Comment(_) => {}
            NodeData::Text(text) => {
                let text = match transform {
                    Some(t) if self.options.apply_text_transform => Cow::Owned(t.apply(text)),
                    _ => Cow::Borrowed(text.as_str()),
                };
                self.emit(&text);
            }
            NodeData::Element(element) => {
                let transform = element.text_transform().or(transform);
                self.emit_element(node, element, transform);
            }
        }
    }

    fn emit_element(&mut self, node: NodeId, element: &Element, transform: Option<TextTransform>) {
        if element.is_hidden_kind() {
            return;
        }

        match (element.tag(), element.input_type()) {
            (Tag::Br, _) => self.blank(),
            (Tag::Img, _) => {
                self.blank_always();
                self.emit_always(element.attr("alt").unwrap_or_default());
                self.blank_always();
            }
            (Tag::Select, _) => {
                self.blank();
                let mut b = self.excluding_form_controls();
                b.visit_options(node, transform);
                drop(b);
                self.blank();
            }
            (Tag::Optgroup, _) => {
                self.emit(element.attr("label").unwrap_or_default());
                self.visit_options(node, transform);
            }
            (Tag::Legend, _) => {
                self.visit_children(node, transform);
                self.blank();
            }
            (Tag::Label, _) => {
                self.blank();
                self.visit_children(node, transform);
                self.blank();
            }
            (Tag::Button, _) => {
                self.blank();
                self.excluding_form_controls()
                    .visit_children(node, transform);
                self.blank();
            }
            (Tag::Input, Some(kind)) if kind.is_button_like() => {
                self.blank();
                let value = match kind {
                    InputType::Image => element
                        .non_empty_attr("value")
                        .or_else(|| element.attr("alt")),
                    _ => element.attr("value"),
                };
                self.excluding_form_controls()
                    .emit(value.unwrap_or_default());
                self.blank();
            }
            (Tag::Input, Some(kind)) if kind.is_checkable() => {
                self.excluding_form_controls()
                    .visit_children(node, transform);
                self.blank();
            }
            (Tag::Textarea, _) => {
                self.excluding_form_controls()
                    .visit_children(node, transform);
            }
            (Tag::Input, _) => {
                let value = element
                    .non_empty_attr("value")
                    .or_else(|| element.attr("placeholder"))
                    .unwrap_or_default();
                self.blank();
                self.excluding_form_controls().emit(value);
                self.blank();
            }
            (Tag::Frame | Tag::Iframe, _) => {
                if let Some(content) = element.frame_content() {
                    self.visit(content, transform);
                }
            }
            (Tag::Ol, _) => self.emit_ordered_list(node, transform),
            (Tag::Q, _) => {
                self.emit(" \"");
                self.visit_children(node, transform);
                self.emit("\" ");
            }
            (tag, _) if tag.is_block() => {
                self.blank();
                self.visit_children(node, transform);
                self.blank();
            }
            _ => self.visit_children(node, transform),
        }
    }

    /// Visit children in order, separating adjacent displayed elements that
    /// have no text between them.
    fn visit_children(&mut self, node: NodeId, transform: Option<TextTransform>) {
        let doc = self.doc;
        let mut after_element = false;
        for &child in doc.children(node) {
            match doc.data(child) {
                NodeData::Element(e) if e.is_displayed() => {
                    if after_element {
                        self.blank();
                    }
                    after_element = true;
                }
                NodeData::Text(_) => after_element = false,
                _ => {}
            }
            self.visit(child, transform);
        }
    }

    /// Options and option groups of a select, each displayed one preceded
    /// by a blank. Other children are skipped.
    fn visit_options(&mut self, node: NodeId, transform: Option<TextTransform>) {
        let doc = self.doc;
        for &child in doc.children(node) {
            if matches!(doc.tag(child), Some(Tag::Option | Tag::Optgroup)) {
                if doc.is_displayed(child) {
                    self.blank();
                }
                self.visit(child, transform);
            }
        }
    }

    /// Number each displayed list item. The ordinal is written before the
    /// item opens its span, so the item's start is patched back afterwards.
    fn emit_ordered_list(&mut self, node: NodeId, transform: Option<TextTransform>) {
        let doc = self.doc;
        self.blank();
        let mut ordinal = 0;
        for &child in doc.children(node) {
            if doc.tag(child) != Some(Tag::Li) || !doc.is_displayed(child) {
                self.visit(child, transform);
                continue;
            }
            ordinal += 1;
            let start = self.text.len();
            let excluded_start = self.excluded.len();
            self.emit(&format!("{ordinal}. "));
            self.visit(child, transform);
            self.patch_start(child, start, excluded_start);
        }
        self.blank();
    }
}

/// Scoped form-control exclusion. Dropping it re-enables the excluded buffer
/// (unless an outer guard is still alive).
struct Excluding<'b, 'd> {
    builder: &'b mut Builder<'d>,
}

impl<'d> Deref for Excluding<'_, 'd> {
    type Target = Builder<'d>;

    fn deref(&self) -> &Self::Target {
        self.builder
    }
}

impl DerefMut for Excluding<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.builder
    }
}

impl Drop for Excluding<'_, '_> {
    fn drop(&mut self) {
        self.builder.exclusion_depth -= 1;
    }
}
