//! Primitive shapes and the stroke → shape classification stage.
//!
//! Purpose
//! - `Shape` is a tagged union over the primitives the item stage consumes.
//! - Recognizers score one stroke each; `ShapeClassifier` keeps the best.
//!
//! Code cross-refs: `Stroke`, `item::ItemClassifier` (next stage).

mod classifier;
mod recognizers;
mod types;

pub use classifier::ShapeClassifier;
pub use recognizers::{DotRecognizer, LineRecognizer, ShapeRecognizer};
pub use types::{Dot, Line, Shape, ShapeKind};
