//! Identification strategies.
//!
//! Each strategy looks at one facet of a candidate element (an attribute,
//! its text, the text labelling it) and reports how many characters of that
//! facet the target pattern left uncovered, or `None` when it does not match.

use spotter_core::{Element, InputType, NodeId, Tag};
use spotter_index::{DocumentIndex, Result};
use spotter_pattern::Pattern;

use crate::weight::FoundBy;

/// One candidate element under test.
pub(crate) struct Probe<'a, 'd> {
    pub index: &'a DocumentIndex<'d>,
    pub target: &'a Pattern,
    pub node: NodeId,
    pub element: &'d Element,
    /// Offset in the form-control-free text where the path match ended.
    pub min_start: usize,
}

impl Probe<'_, '_> {
    /// Coverage reported by `strategy`.
    pub fn coverage(&self, strategy: FoundBy) -> Result<Option<usize>> {
        let element = self.element;
        let target = self.target;

        let coverage = match strategy {
            FoundBy::Id => full_match(target, element.non_empty_attr("id")),
            FoundBy::Name => full_match(target, element.non_empty_attr("name")),
            FoundBy::LabelElement => self.label_elements()?,
            FoundBy::AriaLabel => contains(target, element.non_empty_attr("aria-label")),
            FoundBy::Text => contains(target, Some(self.index.text_of(self.node)?)),
            FoundBy::Title if !is_image(element) => {
                contains(target, element.non_empty_attr("title"))
            }
            FoundBy::ImageAlt if is_image(element) => {
                contains(target, element.non_empty_attr("alt"))
            }
            FoundBy::ImageTitle if is_image(element) => {
                contains(target, element.non_empty_attr("title"))
            }
            FoundBy::ImageSource if is_image(element) => element
                .non_empty_attr("src")
                .and_then(|src| target.chars_before_shortest_match_at_end(src)),
            FoundBy::Placeholder => contains(target, element.non_empty_attr("placeholder")),
            FoundBy::LabelTextBefore => {
                let label = self.index.label_text_before(self.node, self.min_start)?;
                target.chars_before_shortest_match_at_end(label)
            }
            FoundBy::LabelTextAfter if is_checkable(element) => {
                let label = self.index.label_text_after(self.node)?;
                target.chars_before_first_occurrence(label)
            }
            _ => None,
        };
        Ok(coverage)
    }

    /// Best coverage over the `<label>` elements pointing at the candidate,
    /// by `for` attribute or by nesting.
    fn label_elements(&self) -> Result<Option<usize>> {
        let doc = self.index.document();
        let id = self.element.non_empty_attr("id");

        let mut best = None;
        for label in self.index.nodes() {
            if doc.tag(label) != Some(Tag::Label) || !doc.is_displayed(label) {
                continue;
            }
            let points_here = match doc.element(label).and_then(|l| l.attr("for")) {
                Some(target_id) => Some(target_id) == id,
                None => doc.contains(label, self.node),
            };
            if !points_here {
                continue;
            }
            let text = self.index.text_of_without_form_controls(label)?;
            if let Some(coverage) = self.target.surrounding_chars(text) {
                best = Some(best.map_or(coverage, |b: usize| b.min(coverage)));
            }
        }
        Ok(best)
    }
}

fn full_match(target: &Pattern, value: Option<&str>) -> Option<usize> {
    value.filter(|v| target.matches(v)).map(|_| 0)
}

fn contains(target: &Pattern, value: Option<&str>) -> Option<usize> {
    value.and_then(|v| target.surrounding_chars(v))
}

fn is_image(element: &Element) -> bool {
    element.tag() == Tag::Img || element.input_type() == Some(InputType::Image)
}

fn is_checkable(element: &Element) -> bool {
    element.input_type().is_some_and(InputType::is_checkable)
}
