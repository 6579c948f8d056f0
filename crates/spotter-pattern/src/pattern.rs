//! Compiled wildcard patterns and their occurrence scans.

use std::fmt;

use spotter_core::FindSpot;

use crate::automaton::Automaton;
use crate::error::{PatternError, Result};
use crate::matcher::Matcher;
use crate::translate::translate;

/// An immutable compiled wildcard pattern.
///
/// `*` matches any run of characters, `?` exactly one character, a
/// backslash makes the next character literal. Matching is case-sensitive.
///
/// Scans report byte offsets into the haystack. Counting methods return
/// `None` where a count is meaningless (no match, empty haystack) and `0`
/// for match-all patterns, which never run their automaton.
#[derive(Clone)]
pub struct Pattern {
    original: Option<String>,
    internal: String,
    automata: Option<Automata>,
}

#[derive(Clone, Debug)]
struct Automata {
    forward: Automaton,
    reverse: Automaton,
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("original", &self.original)
            .field("internal", &self.internal)
            .field("match_all", &self.is_match_all())
            .finish()
    }
}

impl Pattern {
    /// Compile a wildcard. An empty wildcard matches everything.
    pub fn compile(wildcard: &str) -> Result<Self> {
        let translation = translate(wildcard);
        let automata = if translation.is_match_all() {
            None
        } else {
            let hir = translation.to_hir();
            let build_err = |message| PatternError::Build {
                pattern: wildcard.to_owned(),
                message,
            };
            Some(Automata {
                forward: Automaton::compile(&hir, false).map_err(build_err)?,
                reverse: Automaton::compile(&hir, true).map_err(build_err)?,
            })
        };

        Ok(Self {
            original: Some(wildcard.to_owned()),
            internal: translation.internal,
            automata,
        })
    }

    /// The universal pattern, standing for an absent wildcard.
    pub fn match_all() -> Self {
        Self {
            original: None,
            internal: String::new(),
            automata: None,
        }
    }

    /// The wildcard source, `None` for `match_all()`.
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    /// Regex-like rendering of the compiled pattern.
    pub fn internal_form(&self) -> &str {
        &self.internal
    }

    #[inline]
    pub fn is_match_all(&self) -> bool {
        self.automata.is_none()
    }

    /// Whether the whole of `haystack` matches.
    pub fn matches(&self, haystack: &str) -> bool {
        match &self.automata {
            None => true,
            Some(a) => a.forward.accepts(haystack),
        }
    }

    /// `matches` for possibly absent input; absent input only matches a
    /// match-all pattern.
    pub fn matches_optional(&self, haystack: Option<&str>) -> bool {
        match haystack {
            Some(h) => self.matches(h),
            None => self.is_match_all(),
        }
    }

    /// Whether some suffix of `haystack` matches in full.
    pub fn matches_at_end(&self, haystack: &str) -> bool {
        match self.shortest_match_at_end(haystack) {
            Some(spot) => !spot.is_not_found(),
            None => false,
        }
    }

    /// Shortest suffix of `haystack` that matches in full, found by the
    /// reverse scan.
    pub fn shortest_match_at_end(&self, haystack: &str) -> Option<FindSpot> {
        let Some(a) = &self.automata else {
            return Some(FindSpot::empty_at(haystack.len()));
        };
        if haystack.is_empty() {
            return Some(FindSpot::NOT_FOUND);
        }
        a.reverse
            .shortest_match_before(haystack, haystack.len())
            .map(|start| FindSpot::new(start, haystack.len()))
    }

    /// Leftmost occurrence.
    pub fn first_occurrence(&self, haystack: &str) -> Option<FindSpot> {
        self.first_occurrence_from(haystack, 0)
    }

    /// Leftmost occurrence starting at or after `from`.
    ///
    /// Returns `NOT_FOUND` for an empty haystack, `[0, 0)` for a match-all
    /// pattern, and `None` when the scan finds nothing.
    pub fn first_occurrence_from(&self, haystack: &str, from: usize) -> Option<FindSpot> {
        if haystack.is_empty() {
            return Some(FindSpot::NOT_FOUND);
        }
        if self.is_match_all() {
            return Some(FindSpot::empty_at(0));
        }
        self.search_from(haystack, from)
    }

    /// Last occurrence. Each search after a hit begins one character after
    /// the previous hit's start.
    pub fn last_occurrence(&self, haystack: &str) -> Option<FindSpot> {
        if haystack.is_empty() {
            return Some(FindSpot::NOT_FOUND);
        }
        if self.is_match_all() {
            return Some(FindSpot::empty_at(0));
        }
        self.occurrences(haystack).last()
    }

    pub fn chars_before_first_occurrence(&self, haystack: &str) -> Option<usize> {
        if self.is_match_all() {
            return Some(0);
        }
        found(self.first_occurrence(haystack)).map(FindSpot::start)
    }

    pub fn chars_before_last_occurrence(&self, haystack: &str) -> Option<usize> {
        if self.is_match_all() {
            return Some(0);
        }
        found(self.last_occurrence(haystack)).map(FindSpot::start)
    }

    pub fn chars_after_last_occurrence(&self, haystack: &str) -> Option<usize> {
        if self.is_match_all() {
            return Some(0);
        }
        found(self.last_occurrence(haystack)).map(|spot| haystack.len() - spot.end())
    }

    /// Characters in front of the shortest matching suffix.
    pub fn chars_before_shortest_match_at_end(&self, haystack: &str) -> Option<usize> {
        if self.is_match_all() {
            return Some(0);
        }
        found(self.shortest_match_at_end(haystack)).map(FindSpot::start)
    }

    /// Characters not covered by the longest occurrence.
    pub fn surrounding_chars(&self, haystack: &str) -> Option<usize> {
        if self.is_match_all() {
            return Some(0);
        }
        self.longest_occurrence_len(haystack)
            .map(|len| haystack.len() - len)
    }

    /// Length of the longest occurrence.
    pub fn matching_chars(&self, haystack: &str) -> Option<usize> {
        if self.is_match_all() {
            return Some(0);
        }
        self.longest_occurrence_len(haystack)
    }

    /// Stateful matcher over `haystack`.
    pub fn matcher<'p, 'h>(&'p self, haystack: &'h str) -> Matcher<'p, 'h> {
        Matcher::new(self, haystack)
    }

    fn longest_occurrence_len(&self, haystack: &str) -> Option<usize> {
        self.occurrences(haystack).map(FindSpot::len).max()
    }

    /// All occurrences, each search beginning one character after the
    /// previous hit's start.
    fn occurrences<'a>(&'a self, haystack: &'a str) -> impl Iterator<Item = FindSpot> + 'a {
        let mut from = 0;
        std::iter::from_fn(move || {
            let spot = self.search_from(haystack, from)?;
            from = next_boundary(haystack, spot.start());
            Some(spot)
        })
    }

    /// Scan for the earliest-starting, shortest match at or after `from`.
    ///
    /// A begin offset whose run reaches a dead state is abandoned and the
    /// scan retries from the next character. Quadratic in the worst case.
    pub(crate) fn search_from(&self, haystack: &str, from: usize) -> Option<FindSpot> {
        let tail = haystack.get(from..)?;
        let Some(a) = &self.automata else {
            return Some(FindSpot::empty_at(from));
        };
        tail.char_indices().find_map(|(offset, _)| {
            let begin = from + offset;
            a.forward
                .shortest_match_from(haystack, begin)
                .map(|end| FindSpot::new(begin, end))
        })
    }
}

/// Offset of the character following the one at `pos`.
pub(crate) fn next_boundary(haystack: &str, pos: usize) -> usize {
    pos + haystack[pos..].chars().next().map_or(1, char::len_utf8)
}

fn found(spot: Option<FindSpot>) -> Option<FindSpot> {
    spot.filter(|s| !s.is_not_found())
}
