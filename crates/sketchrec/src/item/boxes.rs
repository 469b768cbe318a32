//! Box recognition placeholder.

use crate::error::{Error, Result};
use crate::shape::Shape;

use super::recognizer::{ItemMatch, ItemRecognizer};

/// Never matches. Registered so every item kind has a recognizer slot.
///
/// A real box recognizer would score 4-line loops whose corners are near
/// right angles and emit `Item::Box`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxRecognizer;

impl ItemRecognizer for BoxRecognizer {
    fn name(&self) -> &'static str {
        "box"
    }

    fn score(&mut self, _shapes: &[Shape]) -> f64 {
        0.0
    }

    fn materialized_item(&mut self) -> Result<ItemMatch> {
        Err(Error::NotFound {
            recognizer: self.name(),
        })
    }
}
