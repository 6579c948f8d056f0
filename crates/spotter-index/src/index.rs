//! The built index and its queries.

use indexmap::IndexMap;
use spotter_core::{Document, Element, FindSpot, NodeId, Tag};

use crate::builder::{Builder, Built};
use crate::dump::SpanTable;
use crate::error::{IndexError, Result};
use crate::invariants::ensure_excluded_span;
use crate::normalized::NormalizedString;
use crate::options::IndexOptions;

/// Normalized text of a document snapshot with the span of every node.
///
/// Read-only once built. Offsets are byte offsets into [`text`]
/// (or into [`text_without_form_controls`] for the `*_without_form_controls`
/// and label queries). Every query on a node outside the index fails with
/// [`IndexError::NodeNotIndexed`]; empty text is not an error.
///
/// [`text`]: DocumentIndex::text
/// [`text_without_form_controls`]: DocumentIndex::text_without_form_controls
#[derive(Debug)]
pub struct DocumentIndex<'d> {
    pub(crate) doc: &'d Document,
    pub(crate) root: NodeId,
    pub(crate) text: NormalizedString,
    pub(crate) excluded: NormalizedString,
    /// Insertion order is document order.
    pub(crate) spans: IndexMap<NodeId, FindSpot>,
    pub(crate) excluded_spans: IndexMap<NodeId, FindSpot>,
}

impl<'d> DocumentIndex<'d> {
    /// Index the whole document.
    pub fn build(doc: &'d Document) -> Self {
        Self::build_from(doc, doc.root())
    }

    /// Index the subtree under `root`.
    pub fn build_from(doc: &'d Document, root: NodeId) -> Self {
        Self::build_with(doc, root, IndexOptions::default())
    }

    pub fn build_with(doc: &'d Document, root: NodeId, options: IndexOptions) -> Self {
        let Built {
            text,
            excluded,
            spans,
            excluded_spans,
        } = Builder::new(doc, options).run(root);

        tracing::debug!(
            root = %root,
            nodes = spans.len(),
            text_len = text.len(),
            "document indexed"
        );

        Self {
            doc,
            root,
            text,
            excluded,
            spans,
            excluded_spans,
        }
    }

    #[inline]
    pub fn document(&self) -> &'d Document {
        self.doc
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The whole normalized text.
    pub fn text(&self) -> &str {
        self.text.as_str().trim()
    }

    /// The whole text with form-control content left out.
    pub fn text_without_form_controls(&self) -> &str {
        self.excluded.as_str().trim()
    }

    pub fn span(&self, node: NodeId) -> Result<FindSpot> {
        match self.spans.get(&node) {
            Some(&spot) => Ok(spot),
            None => Err(self.not_indexed(node)),
        }
    }

    pub fn span_without_form_controls(&self, node: NodeId) -> Result<FindSpot> {
        match self.excluded_spans.get(&node) {
            Some(&spot) => Ok(spot),
            None => Err(self.not_indexed(node)),
        }
    }

    /// Text contributed by `node` and its descendants.
    pub fn text_of(&self, node: NodeId) -> Result<&str> {
        let spot = self.span(node)?;
        Ok(self.text.trimmed(spot.start(), spot.end()))
    }

    pub fn text_of_without_form_controls(&self, node: NodeId) -> Result<&str> {
        let spot = self.span_without_form_controls(node)?;
        Ok(self.excluded.trimmed(spot.start(), spot.end()))
    }

    /// All text in front of `node`.
    pub fn text_before(&self, node: NodeId) -> Result<&str> {
        let spot = self.span(node)?;
        Ok(self.text.trimmed(0, spot.start()))
    }

    /// All text behind `node`.
    pub fn text_after(&self, node: NodeId) -> Result<&str> {
        let spot = self.span(node)?;
        Ok(self.text.trimmed(spot.end(), self.text.len()))
    }

    /// Text labelling `node` from the front.
    ///
    /// Walks back in document order until the body, the previous displayed
    /// form control or an element of another form, and returns the
    /// form-control-free text from there (but not before `min_start`) up
    /// to `node`. A previous control with nothing between it and `node`
    /// does not stop the walk.
    pub fn label_text_before(&self, node: NodeId, min_start: usize) -> Result<&str> {
        let position = self.position(node)?;
        let end = self.excluded_span(node).start();
        let form = self.form_of(node);

        let mut floor = None;
        for &prev in self.spans.keys().take(position).rev() {
            let Some(element) = self.doc.element(prev) else {
                continue;
            };
            if element.tag() == Tag::Body {
                floor = Some(self.excluded_span(prev).start());
                break;
            }
            if self.doc.contains(prev, node) {
                continue;
            }
            if self.form_of(prev) != form {
                floor = Some(self.excluded_span(prev).end());
                break;
            }
            if is_control(element) {
                let boundary = self.excluded_span(prev).end();
                if !self.excluded.trimmed(boundary.max(min_start), end).is_empty() {
                    floor = Some(boundary);
                    break;
                }
            }
        }

        let floor = floor.unwrap_or(min_start).max(min_start);
        Ok(self.excluded.trimmed(floor, end))
    }

    /// Text labelling `node` from behind: everything up to the next
    /// displayed form control or the end of `node`'s form.
    pub fn label_text_after(&self, node: NodeId) -> Result<&str> {
        let position = self.position(node)?;
        let start = self.excluded_span(node).end();
        let form = self.form_of(node);

        let mut stop = self.excluded.len();
        for &next in self.spans.keys().skip(position + 1) {
            if self.doc.contains(node, next) {
                continue;
            }
            let Some(element) = self.doc.element(next) else {
                continue;
            };
            if self.form_of(next) != form || is_control(element) {
                stop = self.excluded_span(next).start();
                break;
            }
        }

        Ok(self.excluded.trimmed(start, stop))
    }

    /// Indexed nodes in document order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.spans.keys().copied()
    }

    /// Document-order position of `node`.
    pub fn position(&self, node: NodeId) -> Result<usize> {
        self.spans
            .get_index_of(&node)
            .ok_or_else(|| self.not_indexed(node))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.spans.contains_key(&node)
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The node → span table, for diagnostics.
    pub fn dump(&self) -> SpanTable<'_, 'd> {
        SpanTable::new(self)
    }

    fn excluded_span(&self, node: NodeId) -> FindSpot {
        ensure_excluded_span(&self.excluded_spans, node)
    }

    /// The form `node` belongs to; a form belongs to itself.
    fn form_of(&self, node: NodeId) -> Option<NodeId> {
        if self.doc.tag(node) == Some(Tag::Form) {
            return Some(node);
        }
        self.doc.enclosing_form(node)
    }

    fn not_indexed(&self, node: NodeId) -> IndexError {
        tracing::debug!(node = %node, spans = %self.dump(), "node is not part of the index");
        IndexError::NodeNotIndexed(node)
    }
}

/// A displayed control that takes part in form submission.
fn is_control(element: &Element) -> bool {
    element.is_displayed() && !element.is_inert() && element.is_submittable()
}
