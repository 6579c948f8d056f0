//! Memoization of compiled patterns.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::pattern::Pattern;

/// Compiles each distinct wildcard once and shares the result.
#[derive(Debug, Default)]
pub struct PatternCache {
    lookup: HashMap<String, Arc<Pattern>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiled pattern for `wildcard`, compiling it on first use.
    pub fn get_or_compile(&mut self, wildcard: &str) -> Result<Arc<Pattern>> {
        if let Some(pattern) = self.lookup.get(wildcard) {
            return Ok(Arc::clone(pattern));
        }

        let pattern = Arc::new(Pattern::compile(wildcard)?);
        self.lookup
            .insert(wildcard.to_owned(), Arc::clone(&pattern));
        Ok(pattern)
    }

    /// Number of distinct wildcards compiled so far.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
