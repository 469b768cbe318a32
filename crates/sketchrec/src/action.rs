//! Cross-item corrections applied after item recognition.
//!
//! A corrector probes the item list with `score` (read-only) and, when chosen,
//! mutates it with `apply`. `apply` re-derives the probed match; failing to do
//! so is reported as `Error::CorrectionDiverged`.

use tracing::debug;

use crate::error::{Error, Result};
use crate::item::{Item, ItemKind};
use crate::select::pick_best;

/// Detects a relationship between recognized items and rewrites the item set.
pub trait ActionCorrector {
    fn name(&self) -> &'static str;
    fn score(&self, items: &[Item]) -> f64;
    fn apply(&self, items: &mut Vec<Item>) -> Result<()>;
}

/// A crossing mark drawn over a closed region pins that region.
///
/// Applying removes the anchor and sets the region's anchored flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorCorrector;

impl AnchorCorrector {
    /// First `(anchor, region)` index pair whose boxes overlap.
    fn find_pair(items: &[Item]) -> Option<(usize, usize)> {
        let anchors = items
            .iter()
            .enumerate()
            .filter(|(_, i)| i.kind() == ItemKind::Anchor);
        for (ai, anchor) in anchors {
            let regions = items
                .iter()
                .enumerate()
                .filter(|(_, i)| i.kind() == ItemKind::ClosedRegion);
            for (ri, region) in regions {
                if anchor.bounds().overlap(&region.bounds()) > 0.0 {
                    return Some((ai, ri));
                }
            }
        }
        None
    }
}

impl ActionCorrector for AnchorCorrector {
    fn name(&self) -> &'static str {
        "anchor_region"
    }

    fn score(&self, items: &[Item]) -> f64 {
        if Self::find_pair(items).is_some() {
            1.0
        } else {
            0.0
        }
    }

    fn apply(&self, items: &mut Vec<Item>) -> Result<()> {
        let (ai, ri) = Self::find_pair(items).ok_or(Error::CorrectionDiverged {
            corrector: self.name(),
        })?;
        if let Some(region) = items[ri].as_closed_region_mut() {
            region.set_anchored(true);
        }
        items.remove(ai);
        Ok(())
    }
}

/// Ordered set of correctors; at most one applies per pass.
#[derive(Default)]
pub struct ActionClassifier {
    correctors: Vec<Box<dyn ActionCorrector>>,
}

impl ActionClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<C: ActionCorrector + 'static>(&mut self, c: C) {
        self.correctors.push(Box::new(c));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.correctors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.correctors.is_empty()
    }

    /// Apply the best-scoring corrector, if any scores positive; returns its name.
    pub fn correct(&self, items: &mut Vec<Item>) -> Result<Option<&'static str>> {
        let scores: Vec<f64> = self
            .correctors
            .iter()
            .map(|c| {
                let s = c.score(items);
                debug!(corrector = c.name(), score = s, "action_score");
                s
            })
            .collect();
        let Some((idx, _)) = pick_best(scores) else {
            return Ok(None);
        };
        let winner = &self.correctors[idx];
        winner.apply(items)?;
        debug!(corrector = winner.name(), items = items.len(), "action_applied");
        Ok(Some(winner.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::item::{Anchor, ClosedRegion};
    use crate::shape::Line;
    use crate::synth::{line_stroke, StrokeCfg};
    use rand::{rngs::StdRng, SeedableRng};

    fn line(a: (i32, i32), b: (i32, i32)) -> Line {
        let mut rng = StdRng::seed_from_u64(0);
        let s = line_stroke(
            Point::new(a.0, a.1),
            Point::new(b.0, b.1),
            0,
            StrokeCfg::default(),
            &mut rng,
        )
        .unwrap();
        Line::new(s)
    }

    fn square(offset: i32) -> Item {
        let o = offset;
        Item::ClosedRegion(ClosedRegion::new(vec![
            line((o, o), (o + 100, o)),
            line((o + 100, o), (o + 100, o + 100)),
            line((o + 100, o + 100), (o, o + 100)),
            line((o, o + 100), (o, o)),
        ]))
    }

    fn cross(cx: i32, cy: i32) -> Item {
        Item::Anchor(Anchor::new(
            line((cx - 20, cy - 20), (cx + 20, cy + 20)),
            line((cx + 20, cy - 20), (cx - 20, cy + 20)),
            Point::new(cx, cy),
        ))
    }

    #[test]
    fn anchor_over_region_pins_it() {
        let mut items = vec![square(0), cross(50, 50)];
        let c = AnchorCorrector;
        assert_eq!(c.score(&items), 1.0);
        c.apply(&mut items).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|i| i.kind() != ItemKind::Anchor));
        assert!(items[0].as_closed_region().unwrap().is_anchored());
    }

    #[test]
    fn anchor_listed_before_region() {
        let mut items = vec![cross(50, 50), square(0)];
        AnchorCorrector.apply(&mut items).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].as_closed_region().unwrap().is_anchored());
    }

    #[test]
    fn distant_anchor_is_left_alone() {
        let items = vec![square(0), cross(400, 400)];
        assert_eq!(AnchorCorrector.score(&items), 0.0);
    }

    #[test]
    fn apply_without_match_diverges() {
        let mut items = vec![square(0)];
        assert!(matches!(
            AnchorCorrector.apply(&mut items),
            Err(Error::CorrectionDiverged { .. })
        ));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn classifier_applies_only_on_positive_probe() {
        let mut ac = ActionClassifier::new();
        ac.add(AnchorCorrector);
        let mut items = vec![square(0), cross(400, 400)];
        assert_eq!(ac.correct(&mut items).unwrap(), None);
        assert_eq!(items.len(), 2);
        items.push(cross(30, 30));
        assert_eq!(ac.correct(&mut items).unwrap(), Some("anchor_region"));
        assert_eq!(items.len(), 2);
    }
}
