#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Document model for the Spotter element locator.
//!
//! - `Document`: arena tree of nodes addressed by `NodeId`
//! - `Element`, `Tag`, `InputType`: element payload and closed kind enums
//! - `FindSpot`: `[start, end)` text interval shared by the pattern engine
//!   and the indexer
//! - `Document::parse_html`: html5ever-based loader
//! - `Colors`: ANSI palette for traces

mod colors;
mod document;
mod element;
mod find_spot;
mod html;
mod tag;

#[cfg(test)]
mod tag_tests;

pub use colors::Colors;
pub use document::{Document, NodeData, NodeId};
pub use element::Element;
pub use find_spot::FindSpot;
pub use tag::{InputType, Tag, TextTransform};
