//! Whitespace-normalizing text buffer.

use std::fmt;

/// Append-only string that collapses whitespace as it grows.
///
/// Every run of whitespace (NBSP included) becomes a single blank. The
/// buffer never starts with a blank and never holds two blanks in a row.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NormalizedString {
    buf: String,
}

impl NormalizedString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text`, collapsing its whitespace against what is already there.
    pub fn append(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                self.append_blank();
            } else {
                self.buf.push(c);
            }
        }
    }

    /// Append a single separating blank unless the buffer is empty or
    /// already ends with one.
    pub fn append_blank(&mut self) {
        if !self.buf.is_empty() && !self.buf.ends_with(' ') {
            self.buf.push(' ');
        }
    }

    /// Byte length.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Trimmed text of `[start, end)`, clamped to the buffer. Empty when
    /// the range is inverted or does not fall on character boundaries.
    pub fn trimmed(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.buf.len());
        if start >= end {
            return "";
        }
        self.buf.get(start..end).map_or("", str::trim)
    }
}

impl fmt::Debug for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.buf, f)
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
