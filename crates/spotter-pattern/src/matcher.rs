//! Stateful matcher with regex-matcher style accessors.

use spotter_core::FindSpot;

use crate::error::{PatternError, Result};
use crate::pattern::{Pattern, next_boundary};

/// Iterates the occurrences of a pattern in one haystack.
///
/// Each `find` after a hit resumes one character after that hit's start,
/// so overlapping occurrences are reported. The accessors fail with
/// `PatternError::NoMatchAvailable` unless the last `find` succeeded.
#[derive(Debug)]
pub struct Matcher<'p, 'h> {
    pattern: &'p Pattern,
    haystack: &'h str,
    next_from: usize,
    current: Option<FindSpot>,
}

impl<'p, 'h> Matcher<'p, 'h> {
    pub(crate) fn new(pattern: &'p Pattern, haystack: &'h str) -> Self {
        Self {
            pattern,
            haystack,
            next_from: 0,
            current: None,
        }
    }

    /// Advance to the next occurrence.
    pub fn find(&mut self) -> bool {
        self.current = self.pattern.search_from(self.haystack, self.next_from);
        match self.current {
            Some(spot) => {
                self.next_from = next_boundary(self.haystack, spot.start());
                true
            }
            None => {
                self.next_from = self.haystack.len() + 1;
                false
            }
        }
    }

    /// Restart the search at `from`.
    pub fn find_at(&mut self, from: usize) -> bool {
        self.next_from = from;
        self.find()
    }

    fn spot(&self) -> Result<FindSpot> {
        self.current.ok_or(PatternError::NoMatchAvailable)
    }

    pub fn start(&self) -> Result<usize> {
        self.spot().map(FindSpot::start)
    }

    pub fn end(&self) -> Result<usize> {
        self.spot().map(FindSpot::end)
    }

    /// The matched text.
    pub fn group(&self) -> Result<&'h str> {
        let haystack = self.haystack;
        self.spot().map(|spot| &haystack[spot.range()])
    }
}
