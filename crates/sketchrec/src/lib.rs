//! Sketch recognition: pointer strokes to shapes, shapes to items.
//!
//! Pipeline per finished stroke:
//! 1. `shape`: score the stroke against each shape recognizer; the best
//!    positive score materializes a `Shape` (dot or line).
//! 2. `item`: offer the pending shapes to each item recognizer; the winner
//!    consumes its shapes and yields an `Item` (anchor, closed region, box).
//! 3. `action`: probe the item list with the correctors and apply the best.
//!
//! Argmax everywhere: strictly greater wins, so ties go to the recognizer
//! registered first. A score of `0.0` never wins.

pub mod action;
pub mod cfg;
pub mod error;
pub mod geometry;
pub mod item;
pub mod pipeline;
mod select;
pub mod shape;
pub mod stroke;
pub mod synth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::SketchCfg;
pub use error::{Error, Result};
pub use pipeline::{PassReport, Sketch};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::action::{ActionClassifier, ActionCorrector, AnchorCorrector};
    pub use crate::geometry::{Angle, Bounds, Point, TimedPoint};
    pub use crate::item::{
        Anchor, BoxItem, ClosedRegion, Item, ItemClassifier, ItemKind, ItemMatch, ItemRecognizer,
    };
    pub use crate::pipeline::{PassReport, Sketch};
    pub use crate::shape::{Dot, Line, Shape, ShapeClassifier, ShapeKind, ShapeRecognizer};
    pub use crate::stroke::{Stroke, VelocityPoint};
    pub use crate::{Error, Result, SketchCfg};
}
