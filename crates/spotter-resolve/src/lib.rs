#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Candidate resolver.
//!
//! Turns a path query such as `"Shipping > City"` plus a control category
//! into the one element it designates:
//!
//! ```text
//! WPath ─compile─▶ Query ─find_candidates─▶ WeightedCandidates ─require_single─▶ NodeId
//! ```
//!
//! Candidates carry a `Weight` (strategy rank, uncovered characters,
//! distance to the path match); the lowest weight wins.

mod category;
mod config;
mod error;
mod query;
mod resolver;
mod strategy;
mod trace;
mod weight;
mod wpath;

#[cfg(test)]
mod category_tests;
#[cfg(test)]
mod query_tests;

pub use category::ControlCategory;
pub use config::{AmbiguityPolicy, ResolverConfig};
pub use error::{ResolveError, Result};
pub use query::Query;
pub use resolver::Resolver;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use weight::{FoundBy, Weight, WeightedCandidate, WeightedCandidates};
pub use wpath::WPath;
