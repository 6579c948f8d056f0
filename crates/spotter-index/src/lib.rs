#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Document text indexer.
//!
//! One pre-order pass linearizes a document into a normalized text buffer
//! and records the `[start, end)` span every visited node contributed. A
//! second buffer omits the content of form controls; label lookups read it.
//!
//! ```text
//! Document ──build──▶ DocumentIndex { text, spans, excluded text, excluded spans }
//! ```

mod builder;
mod dump;
mod error;
mod index;
mod invariants;
mod normalized;
mod options;

#[cfg(test)]
mod index_tests;

pub use dump::SpanTable;
pub use error::{IndexError, Result};
pub use index::DocumentIndex;
pub use normalized::NormalizedString;
pub use options::IndexOptions;
