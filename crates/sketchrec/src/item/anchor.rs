//! Crossing-mark ("X") detection over pairs of lines.

use tracing::debug;

use crate::error::{Error, Result};
use crate::shape::{Line, Shape};

use super::recognizer::{lines_of, ItemMatch, ItemRecognizer};
use super::types::{Anchor, Item};

/// How much two lines look like an X, in `[0, 1]`.
///
/// Product of: the acute angle normalized by `π/2`, length similarity
/// `1 − |l1 − l2| / max(l1, l2)`, and for each line how centered the crossing
/// is along it. Segments that do not cross as bounded segments score `0`.
pub fn anchor_gauge(l1: &Line, l2: &Line) -> f64 {
    let Some(x) = l1.segment_intersection(l2) else {
        return 0.0;
    };
    let (len1, len2) = (l1.length(), l2.length());
    let longest = len1.max(len2);
    if len1 <= 0.0 || len2 <= 0.0 {
        return 0.0;
    }
    let angle = 2.0 * l1.acute_angle_to(l2).value() / std::f64::consts::PI;
    let similarity = 1.0 - (len1 - len2).abs() / longest;
    let spacing = |l: &Line, len: f64| {
        let off = (l.start().distance_to(&x) - l.end().distance_to(&x)).abs();
        (1.0 - off / len).max(0.0)
    };
    angle * similarity * spacing(l1, len1) * spacing(l2, len2)
}

/// Best-scoring crossing pair among all unordered pairs of lines.
#[derive(Debug, Default)]
pub struct AnchorRecognizer {
    found: Option<ItemMatch>,
}

impl AnchorRecognizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemRecognizer for AnchorRecognizer {
    fn name(&self) -> &'static str {
        "anchor"
    }

    fn score(&mut self, shapes: &[Shape]) -> f64 {
        self.found = None;
        let lines = lines_of(shapes);
        let mut high = 0.0;
        let mut best: Option<(usize, usize)> = None;
        for i in 0..lines.len() {
            for j in (i + 1)..lines.len() {
                let g = anchor_gauge(lines[i].1, lines[j].1);
                if g > high {
                    high = g;
                    best = Some((i, j));
                }
            }
        }
        let Some((i, j)) = best else {
            return 0.0;
        };
        let (ia, a) = lines[i];
        let (ib, b) = lines[j];
        // Positive gauge implies a bounded crossing.
        let Some(center) = a.segment_intersection(b) else {
            return 0.0;
        };
        debug!(first = ia, second = ib, %center, gauge = high, "anchor_pair");
        self.found = Some(ItemMatch {
            item: Item::Anchor(Anchor::new(a.clone(), b.clone(), center)),
            consumed: vec![ia, ib],
        });
        high
    }

    fn materialized_item(&mut self) -> Result<ItemMatch> {
        self.found.take().ok_or(Error::NotFound {
            recognizer: self.name(),
        })
    }
}
