//! Half-open text intervals.

use std::fmt;
use std::ops::Range;

/// A `[start, end)` interval of byte offsets into a string.
///
/// Offsets always fall on UTF-8 character boundaries. `NOT_FOUND` marks a
/// search that was meaningless for its input (e.g. an empty haystack), as
/// opposed to a search that ran and failed, which callers model as `None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FindSpot {
    start: usize,
    end: usize,
}

impl FindSpot {
    /// Sentinel for "no search was possible".
    pub const NOT_FOUND: Self = Self {
        start: usize::MAX,
        end: usize::MAX,
    };

    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "FindSpot start {start} > end {end}");
        Self { start, end }
    }

    /// Zero-width spot at `pos`.
    #[inline]
    pub fn empty_at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn start(self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn is_not_found(self) -> bool {
        self == Self::NOT_FOUND
    }

    #[inline]
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether `other` lies within `self`.
    pub fn contains(self, other: FindSpot) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Move the start, keeping the end. Used for retroactive corrections.
    ///
    /// # Panics
    /// Panics if `start > end`.
    pub fn with_start(self, start: usize) -> Self {
        Self::new(start, self.end)
    }
}

impl fmt::Debug for FindSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_not_found() {
            f.write_str("NOT_FOUND")
        } else {
            write!(f, "[{}, {})", self.start, self.end)
        }
    }
}

impl fmt::Display for FindSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
