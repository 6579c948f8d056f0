//! Tracing of candidate search.
//!
//! `NoopTracer` compiles away entirely. `PrintTracer` collects one line per
//! event for debugging why a query resolved the way it did.

use spotter_core::{Colors, Document, NodeId};

use crate::category::ControlCategory;
use crate::query::Query;
use crate::weight::Weight;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Query header and accepted candidates.
    #[default]
    Default,
    /// Also elements rejected because the path did not occur before them.
    Verbose,
}

/// Instrumentation hooks called by `Resolver::find_candidates_with`.
pub trait Tracer {
    /// Called once before the search.
    fn trace_query(&mut self, query: &Query, category: ControlCategory);

    /// Called for an admitted element whose preceding text lacks the path.
    fn trace_path_miss(&mut self, node: NodeId);

    /// Called for every strategy that matched.
    fn trace_candidate(&mut self, node: NodeId, weight: Weight);

    /// Called once after the search with the number of candidates found.
    fn trace_done(&mut self, count: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_query(&mut self, _query: &Query, _category: ControlCategory) {}

    #[inline(always)]
    fn trace_path_miss(&mut self, _node: NodeId) {}

    #[inline(always)]
    fn trace_candidate(&mut self, _node: NodeId, _weight: Weight) {}

    #[inline(always)]
    fn trace_done(&mut self, _count: usize) {}
}

/// Tracer that collects a readable log of the search.
pub struct PrintTracer<'d> {
    doc: &'d Document,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl<'d> PrintTracer<'d> {
    pub fn new(doc: &'d Document, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            doc,
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn node_label(&self, node: NodeId) -> String {
        let c = self.colors;
        format!("{}{}{}", c.blue, self.doc.describe(node), c.reset)
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_query(&mut self, query: &Query, category: ControlCategory) {
        let c = self.colors;
        self.lines.push(format!(
            "{}{}{} {}({}){}",
            c.green, query, c.reset, c.dim, category, c.reset
        ));
    }

    fn trace_path_miss(&mut self, node: NodeId) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let c = self.colors;
        let label = self.node_label(node);
        self.lines
            .push(format!("  - {label} {}path not before{}", c.red, c.reset));
    }

    fn trace_candidate(&mut self, node: NodeId, weight: Weight) {
        let c = self.colors;
        let label = self.node_label(node);
        self.lines
            .push(format!("  + {label} {}{weight}{}", c.dim, c.reset));
    }

    fn trace_done(&mut self, count: usize) {
        let c = self.colors;
        self.lines
            .push(format!("  {}{count} candidate(s){}", c.dim, c.reset));
    }
}
