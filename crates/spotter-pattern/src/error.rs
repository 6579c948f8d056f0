//! Errors raised by pattern compilation and matching.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The automaton for a pattern exceeded the library's limits.
    #[error("failed to compile pattern '{pattern}': {message}")]
    Build { pattern: String, message: String },

    /// A match accessor was called without a successful `find`.
    #[error("no match available")]
    NoMatchAvailable,
}

pub type Result<T> = std::result::Result<T, PatternError>;
