use spotter_core::NodeId;
use spotter_index::IndexError;
use spotter_pattern::PatternError;

/// Why a query could not be resolved to one element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no control matches '{query}'")]
    NoMatch { query: String },

    /// Several elements qualify and the query has nothing to tell them apart.
    #[error("'{query}' matches {count} controls and has no criteria to choose between them")]
    Ambiguous {
        query: String,
        count: usize,
        /// The competing elements, in document order.
        candidates: Vec<NodeId>,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
