//! Structural items and the shapes → item classification stage.
//!
//! Purpose
//! - `Item` is a tagged union over anchors, closed regions, and boxes.
//! - Item recognizers score the whole pending-shape window and remember their
//!   best match; `ItemClassifier` materializes the winning recognizer's match.
//!
//! Notes
//! - Recognizers see a borrowed slice of shapes and report the indices they
//!   consumed. Only the pipeline removes shapes from its pool.
//! - The closed-region search works on a line arena addressed by index
//!   (`LineEnd = (line, Head|Tail)`), see `loop_search`.

mod anchor;
mod boxes;
mod classifier;
pub mod loop_search;
mod recognizer;
mod types;

pub use anchor::{anchor_gauge, AnchorRecognizer};
pub use boxes::BoxRecognizer;
pub use classifier::ItemClassifier;
pub use loop_search::{connection_score, ClosedRegionRecognizer, End, LineEnd};
pub use recognizer::{ItemMatch, ItemRecognizer};
pub use types::{Anchor, BoxItem, ClosedRegion, Item, ItemCore, ItemKind};
