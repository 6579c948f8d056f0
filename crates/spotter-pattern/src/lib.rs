#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Wildcard pattern engine.
//!
//! DOS-style wildcards (`*`, `?`, backslash escapes) are translated to a
//! `regex-syntax` HIR and compiled into forward and reverse dense DFAs.
//! Scans step the DFAs directly to find earliest-starting, shortest
//! occurrences and matching suffixes.

mod automaton;
mod cache;
mod error;
mod matcher;
mod pattern;
mod translate;

#[cfg(test)]
mod pattern_tests;

pub use cache::PatternCache;
pub use error::{PatternError, Result};
pub use matcher::Matcher;
pub use pattern::Pattern;
