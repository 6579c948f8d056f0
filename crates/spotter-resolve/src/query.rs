//! Compiled path queries.

use std::fmt;
use std::sync::Arc;

use spotter_pattern::{Pattern, PatternCache, Result};

use crate::wpath::WPath;

/// A `WPath` with its criteria compiled.
///
/// The path segments become one pattern (joined with `*`) that must occur
/// in the text in front of a candidate. The last segment becomes the target
/// pattern matched against the candidate itself.
#[derive(Clone, Debug)]
pub struct Query {
    wpath: WPath,
    path: Option<Arc<Pattern>>,
    target: Option<Arc<Pattern>>,
    discriminating: bool,
}

impl Query {
    pub fn compile(wpath: &WPath) -> Result<Self> {
        Self::build(wpath, |wildcard| Pattern::compile(wildcard).map(Arc::new))
    }

    /// Compile through `cache`, sharing patterns with earlier queries.
    pub fn compile_cached(wpath: &WPath, cache: &mut PatternCache) -> Result<Self> {
        Self::build(wpath, |wildcard| cache.get_or_compile(wildcard))
    }

    fn build(
        wpath: &WPath,
        mut compile: impl FnMut(&str) -> Result<Arc<Pattern>>,
    ) -> Result<Self> {
        let path = match wpath.path() {
            [] => None,
            segments => Some(compile(&segments.join("*"))?),
        };
        let target = wpath.last().map(&mut compile).transpose()?;
        let discriminating = wpath
            .segments()
            .iter()
            .any(|segment| segment.chars().any(|c| c != '*'));

        Ok(Self {
            wpath: wpath.clone(),
            path,
            target,
            discriminating,
        })
    }

    pub fn wpath(&self) -> &WPath {
        &self.wpath
    }

    /// Pattern that must occur in front of a candidate.
    pub fn path_pattern(&self) -> Option<&Pattern> {
        self.path.as_deref()
    }

    /// Pattern identifying the candidate itself.
    pub fn target_pattern(&self) -> Option<&Pattern> {
        self.target.as_deref()
    }

    /// Whether any segment holds more than `*` wildcards.
    pub fn is_discriminating(&self) -> bool {
        self.discriminating
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.wpath, f)
    }
}
