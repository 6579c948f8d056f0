//! Path queries as written by users: `"Search > Name"`.

use std::fmt;

/// An ordered list of text criteria, outermost first.
///
/// Segments are separated by `>`; `\>` is a literal `>`. Other backslash
/// escapes are left in place for the wildcard compiler.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WPath {
    segments: Vec<String>,
}

impl WPath {
    /// Split `source` into trimmed, non-empty segments.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = source.chars();

        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some('>') => current.push('>'),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => current.push('\\'),
                },
                '>' => finish_segment(&mut segments, &mut current),
                c => current.push(c),
            }
        }
        finish_segment(&mut segments, &mut current);

        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Every segment but the target.
    pub fn path(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, path)) => path,
            None => &[],
        }
    }

    /// The target segment, naming the element itself.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

fn finish_segment(segments: &mut Vec<String>, current: &mut String) {
    let segment = current.trim();
    if !segment.is_empty() {
        segments.push(segment.to_owned());
    }
    current.clear();
}

impl fmt::Display for WPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(&segment.replace('>', "\\>"))?;
        }
        Ok(())
    }
}
