//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use indexmap::IndexMap;
use spotter_core::{FindSpot, NodeId};

/// Span slot of a node the builder has already opened.
pub(crate) fn ensure_recorded(spans: &mut IndexMap<NodeId, FindSpot>, node: NodeId) -> &mut FindSpot {
    spans.get_mut(&node).unwrap_or_else(|| {
        panic!("DocumentIndex: span of {node} patched before it was recorded")
    })
}

/// Excluded-buffer span of a node that has a full-text span.
pub(crate) fn ensure_excluded_span(spans: &IndexMap<NodeId, FindSpot>, node: NodeId) -> FindSpot {
    spans.get(&node).copied().unwrap_or_else(|| {
        panic!("DocumentIndex: {node} has a span but no excluded span")
    })
}
