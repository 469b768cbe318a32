//! Ranks item recognizers against the pending-shape window.

use tracing::debug;

use crate::error::Result;
use crate::select::pick_best;
use crate::shape::Shape;

use super::recognizer::{ItemMatch, ItemRecognizer};

/// Ordered set of item recognizers; registration order breaks ties.
#[derive(Default)]
pub struct ItemClassifier {
    recognizers: Vec<Box<dyn ItemRecognizer>>,
}

impl ItemClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<R: ItemRecognizer + 'static>(&mut self, r: R) {
        self.recognizers.push(Box::new(r));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    /// The winning recognizer's match, or `None` when nothing scores positive.
    ///
    /// Consumed indices refer to `shapes`.
    pub fn classify(&mut self, shapes: &[Shape]) -> Result<Option<ItemMatch>> {
        if shapes.is_empty() {
            return Ok(None);
        }
        let mut scores = Vec::with_capacity(self.recognizers.len());
        for r in self.recognizers.iter_mut() {
            let s = r.score(shapes);
            debug!(recognizer = r.name(), score = s, "item_score");
            scores.push(s);
        }
        let Some((idx, score)) = pick_best(scores) else {
            return Ok(None);
        };
        let winner = &mut self.recognizers[idx];
        let found = winner.materialized_item()?;
        debug!(
            recognizer = winner.name(),
            score,
            consumed = found.consumed.len(),
            "item_match"
        );
        Ok(Some(found))
    }
}
