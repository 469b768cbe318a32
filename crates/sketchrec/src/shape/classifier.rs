//! Ranks shape recognizers against a finished stroke.

use tracing::{debug, warn};

use crate::select::pick_best;
use crate::stroke::Stroke;

use super::recognizers::ShapeRecognizer;
use super::types::Shape;

/// Ordered set of shape recognizers; registration order breaks ties.
#[derive(Default)]
pub struct ShapeClassifier {
    recognizers: Vec<Box<dyn ShapeRecognizer>>,
}

impl ShapeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<R: ShapeRecognizer + 'static>(&mut self, r: R) {
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

    /// Materialize the best-scoring shape, or drop the stroke when nothing
    /// scores positive.
    pub fn classify(&self, stroke: Stroke) -> Option<Shape> {
        let scores: Vec<f64> = self
            .recognizers
            .iter()
            .map(|r| {
                let s = r.score(&stroke);
                debug!(recognizer = r.name(), score = s, "shape_score");
                s
            })
            .collect();
        let Some((idx, score)) = pick_best(scores) else {
            warn!(samples = stroke.len(), "stroke dropped: no shape scored positive");
            return None;
        };
        let winner = &self.recognizers[idx];
        debug!(recognizer = winner.name(), score, "shape_match");
        Some(winner.materialize(stroke))
    }
}
