//! Candidate search and selection.

use indexmap::IndexMap;
use spotter_core::NodeId;
use spotter_index::DocumentIndex;

use crate::category::ControlCategory;
use crate::config::{AmbiguityPolicy, ResolverConfig};
use crate::error::{ResolveError, Result};
use crate::query::Query;
use crate::strategy::Probe;
use crate::trace::{NoopTracer, Tracer};
use crate::weight::{Weight, WeightedCandidate, WeightedCandidates};
use crate::wpath::WPath;

/// Resolves path queries against one document index.
pub struct Resolver<'i, 'd> {
    index: &'i DocumentIndex<'d>,
    config: ResolverConfig,
}

impl<'i, 'd> Resolver<'i, 'd> {
    pub fn new(index: &'i DocumentIndex<'d>) -> Self {
        Self::with_config(index, ResolverConfig::default())
    }

    pub fn with_config(index: &'i DocumentIndex<'d>, config: ResolverConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &'i DocumentIndex<'d> {
        self.index
    }

    /// All candidates for `query` among elements of `category`.
    pub fn find_candidates(
        &self,
        query: &Query,
        category: ControlCategory,
    ) -> Result<WeightedCandidates> {
        self.find_candidates_with(query, category, &mut NoopTracer)
    }

    /// `find_candidates`, reporting each step to `tracer`.
    ///
    /// An admitted element qualifies only if the path pattern occurs in the
    /// text before it. Every strategy of the category that then matches the
    /// target adds one candidate; a query without target adds one candidate
    /// per qualifying element.
    pub fn find_candidates_with<T: Tracer>(
        &self,
        query: &Query,
        category: ControlCategory,
        tracer: &mut T,
    ) -> Result<WeightedCandidates> {
        tracer.trace_query(query, category);

        let doc = self.index.document();
        let excluded_text = self.index.text_without_form_controls();
        let target = query.target_pattern().filter(|t| !t.is_match_all());
        let mut candidates = WeightedCandidates::new();

        for (position, node) in self.index.nodes().enumerate() {
            if !category.admits(doc, node) {
                continue;
            }
            let Some(element) = doc.element(node) else {
                continue;
            };

            let (distance, min_start) = match query.path_pattern() {
                None => (0, 0),
                Some(path) => {
                    let before = self.index.text_before(node)?;
                    let Some(distance) = path.chars_after_last_occurrence(before) else {
                        tracer.trace_path_miss(node);
                        continue;
                    };
                    let start = self.index.span_without_form_controls(node)?.start();
                    let excluded_before = excluded_text
                        .get(..start.min(excluded_text.len()))
                        .unwrap_or_default();
                    let min_start = path
                        .last_occurrence(excluded_before)
                        .filter(|spot| !spot.is_not_found())
                        .map_or(0, |spot| spot.end());
                    (distance, min_start)
                }
            };

            let Some(target) = target else {
                let weight = Weight {
                    distance,
                    ..Weight::default()
                };
                tracer.trace_candidate(node, weight);
                candidates.push(WeightedCandidate {
                    node,
                    weight,
                    position,
                });
                continue;
            };

            let probe = Probe {
                index: self.index,
                target,
                node,
                element,
                min_start,
            };
            for &strategy in category.strategies() {
                let Some(coverage) = probe.coverage(strategy)? else {
                    continue;
                };
                let weight = Weight::new(strategy, coverage, distance);
                tracing::trace!(%node, %weight, "strategy matched");
                tracer.trace_candidate(node, weight);
                candidates.push(WeightedCandidate {
                    node,
                    weight,
                    position,
                });
            }
        }

        tracer.trace_done(candidates.len());
        Ok(candidates)
    }

    /// Pick the one element `candidates` designate.
    ///
    /// Each node counts once, with its best weight. The lowest weight wins
    /// and document order breaks ties. When the query has no discriminating
    /// criteria and several nodes remain, the configured `AmbiguityPolicy`
    /// decides.
    pub fn require_single(&self, candidates: WeightedCandidates, query: &Query) -> Result<NodeId> {
        let mut best: IndexMap<NodeId, WeightedCandidate> = IndexMap::new();
        for candidate in candidates {
            best.entry(candidate.node)
                .and_modify(|kept| {
                    if candidate.weight < kept.weight {
                        *kept = candidate;
                    }
                })
                .or_insert(candidate);
        }

        if best.is_empty() {
            return Err(ResolveError::NoMatch {
                query: query.to_string(),
            });
        }

        if !query.is_discriminating() && best.len() > 1 {
            let mut nodes: Vec<&WeightedCandidate> = best.values().collect();
            nodes.sort_by_key(|c| c.position);
            match self.config.ambiguity {
                AmbiguityPolicy::Fail => {
                    return Err(ResolveError::Ambiguous {
                        query: query.to_string(),
                        count: nodes.len(),
                        candidates: nodes.iter().map(|c| c.node).collect(),
                    });
                }
                AmbiguityPolicy::WarnAndPickFirst => {
                    let first = nodes[0].node;
                    tracing::warn!(
                        query = %query,
                        count = nodes.len(),
                        picked = %first,
                        "ambiguous query without discriminating criteria, using the first match"
                    );
                    return Ok(first);
                }
            }
        }

        best.values()
            .min_by_key(|c| (c.weight, c.position))
            .map(|c| c.node)
            .ok_or_else(|| ResolveError::NoMatch {
                query: query.to_string(),
            })
    }

    /// `find_candidates` followed by `require_single`.
    pub fn resolve(&self, query: &Query, category: ControlCategory) -> Result<NodeId> {
        let candidates = self.find_candidates(query, category)?;
        self.require_single(candidates, query)
    }

    /// Parse, compile and resolve a path written as `"Search > Name"`.
    pub fn locate(&self, wpath: &str, category: ControlCategory) -> Result<NodeId> {
        let query = Query::compile(&WPath::parse(wpath))?;
        self.resolve(&query, category)
    }
}
