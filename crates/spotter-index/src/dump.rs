//! Human-readable span table.

use std::fmt;

use crate::index::DocumentIndex;
use crate::invariants::ensure_excluded_span;

/// One line per indexed node, in document order:
/// `position node label span excluded-span`.
pub struct SpanTable<'i, 'd> {
    index: &'i DocumentIndex<'d>,
}

impl<'i, 'd> SpanTable<'i, 'd> {
    pub(crate) fn new(index: &'i DocumentIndex<'d>) -> Self {
        Self { index }
    }
}

impl fmt::Display for SpanTable<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index;
        for (position, (&node, &span)) in index.spans.iter().enumerate() {
            let excluded = ensure_excluded_span(&index.excluded_spans, node);
            writeln!(
                f,
                "{position} {node} {} {span} {excluded}",
                index.doc.describe(node)
            )?;
        }
        Ok(())
    }
}
