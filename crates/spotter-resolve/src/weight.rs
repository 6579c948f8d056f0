//! Candidate weights. Lower is better.

use std::fmt;

use spotter_core::NodeId;

/// How a candidate was identified, strongest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FoundBy {
    /// `id` attribute equals the target.
    Id,
    /// A `<label>` for the element holds the target.
    LabelElement,
    AriaLabel,
    /// The element's own text holds the target.
    Text,
    /// `name` attribute equals the target.
    Name,
    Title,
    ImageAlt,
    ImageTitle,
    /// Image `src` ends with the target.
    ImageSource,
    Placeholder,
    /// The text labelling a checkbox or radio from behind holds the target.
    LabelTextAfter,
    /// The text labelling the element from the front ends with the target.
    LabelTextBefore,
    /// Admitted by its control category alone; the query names no target.
    #[default]
    Category,
}

impl FoundBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::LabelElement => "label-element",
            Self::AriaLabel => "aria-label",
            Self::Text => "text",
            Self::Name => "name",
            Self::Title => "title",
            Self::ImageAlt => "image-alt",
            Self::ImageTitle => "image-title",
            Self::ImageSource => "image-source",
            Self::Placeholder => "placeholder",
            Self::LabelTextBefore => "label-before",
            Self::LabelTextAfter => "label-after",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for FoundBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexicographically ordered match strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight {
    pub found_by: FoundBy,
    /// Characters around the target match that the target did not cover.
    pub coverage: usize,
    /// Characters between the end of the path match and the candidate.
    pub distance: usize,
}

impl Weight {
    pub fn new(found_by: FoundBy, coverage: usize, distance: usize) -> Self {
        Self {
            found_by,
            coverage,
            distance,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} coverage={} distance={}",
            self.found_by, self.coverage, self.distance
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightedCandidate {
    pub node: NodeId,
    pub weight: Weight,
    /// Document-order position, breaks weight ties.
    pub position: usize,
}

/// Candidates in discovery order. Nodes may repeat, one entry per strategy
/// that matched them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedCandidates {
    items: Vec<WeightedCandidate>,
}

impl WeightedCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: WeightedCandidate) {
        self.items.push(candidate);
    }

    /// Append `other` behind `self`. Nothing is re-ranked.
    pub fn merge(mut self, other: WeightedCandidates) -> Self {
        self.items.extend(other.items);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightedCandidate> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[WeightedCandidate] {
        &self.items
    }
}

impl FromIterator<WeightedCandidate> for WeightedCandidates {
    fn from_iter<I: IntoIterator<Item = WeightedCandidate>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for WeightedCandidates {
    type Item = WeightedCandidate;
    type IntoIter = std::vec::IntoIter<WeightedCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a WeightedCandidates {
    type Item = &'a WeightedCandidate;
    type IntoIter = std::slice::Iter<'a, WeightedCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
