//! Pipeline orchestrator: gesture feed, pools, and the three-stage pass.
//!
//! Purpose
//! - `Sketch` owns the pending-shape pool and the recognized-item pool; it is
//!   the only writer of either.
//! - Each finished gesture runs one full pass: shape classification, item
//!   classification over the pending window, then action correction.
//!
//! Notes
//! - Recognizers and correctors see borrowed views. Consumed shapes are removed
//!   here, by index, highest first.
//! - Item recognizers only see the most recent `max_pending_shapes` shapes.

use tracing::{debug, warn};

use crate::action::{ActionClassifier, ActionCorrector, AnchorCorrector};
use crate::cfg::SketchCfg;
use crate::error::{Error, Result};
use crate::geometry::{Point, TimedPoint};
use crate::item::{
    AnchorRecognizer, BoxRecognizer, ClosedRegionRecognizer, Item, ItemClassifier, ItemKind,
    ItemRecognizer,
};
use crate::shape::{DotRecognizer, LineRecognizer, Shape, ShapeClassifier, ShapeKind, ShapeRecognizer};
use crate::stroke::Stroke;

/// What one classification pass produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Kind of the shape added to the pending pool; `None` if the stroke was dropped.
    pub shape: Option<ShapeKind>,
    /// Kind of the item recognized this pass.
    pub item: Option<ItemKind>,
    /// Name of the corrector applied this pass.
    pub correction: Option<&'static str>,
}

/// A recognition session.
pub struct Sketch {
    cfg: SketchCfg,
    shape_classifier: ShapeClassifier,
    item_classifier: ItemClassifier,
    action_classifier: ActionClassifier,
    pending: Vec<Shape>,
    items: Vec<Item>,
    collecting: Option<Vec<TimedPoint>>,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::with_defaults(SketchCfg::default())
    }
}

impl Sketch {
    /// Session without any recognizers or correctors registered.
    pub fn new(cfg: SketchCfg) -> Self {
        Self {
            cfg,
            shape_classifier: ShapeClassifier::new(),
            item_classifier: ItemClassifier::new(),
            action_classifier: ActionClassifier::new(),
            pending: Vec::new(),
            items: Vec::new(),
            collecting: None,
        }
    }

    /// Session with the standard recognizers: dot and line shapes; closed
    /// region, box and anchor items; the anchor-over-region correction.
    pub fn with_defaults(cfg: SketchCfg) -> Self {
        let mut s = Self::new(cfg);
        s.add_shape_recognizer(DotRecognizer::new(&cfg));
        s.add_shape_recognizer(LineRecognizer::new(&cfg));
        s.add_item_recognizer(ClosedRegionRecognizer::new(cfg.min_loop_lines));
        s.add_item_recognizer(BoxRecognizer);
        s.add_item_recognizer(AnchorRecognizer::new());
        s.add_corrector(AnchorCorrector);
        s
    }

    #[inline]
    pub fn cfg(&self) -> &SketchCfg {
        &self.cfg
    }

    pub fn add_shape_recognizer<R: ShapeRecognizer + 'static>(&mut self, r: R) {
        self.shape_classifier.add(r);
    }

    pub fn add_item_recognizer<R: ItemRecognizer + 'static>(&mut self, r: R) {
        self.item_classifier.add(r);
    }

    pub fn add_corrector<C: ActionCorrector + 'static>(&mut self, c: C) {
        self.action_classifier.add(c);
    }

    // --- gesture feed -------------------------------------------------------

    /// Pointer pressed: begin collecting a stroke.
    pub fn start_stroke(&mut self, x: i32, y: i32, t: u64) -> Result<()> {
        if self.collecting.is_some() {
            return Err(Error::StrokeInProgress);
        }
        self.collecting = Some(vec![TimedPoint::new(x, y, t)]);
        Ok(())
    }

    /// Pointer dragged: append a sample to the stroke being collected.
    pub fn continue_stroke(&mut self, x: i32, y: i32, t: u64) -> Result<()> {
        let samples = self.collecting.as_mut().ok_or(Error::NoActiveStroke)?;
        samples.push(TimedPoint::new(x, y, t));
        Ok(())
    }

    /// Pointer released: finish the stroke and run one classification pass.
    pub fn end_stroke(&mut self, x: i32, y: i32, t: u64) -> Result<PassReport> {
        let mut samples = self.collecting.take().ok_or(Error::NoActiveStroke)?;
        samples.push(TimedPoint::new(x, y, t));
        let stroke = Stroke::new(&samples)?;
        self.classify_stroke(stroke)
    }

    /// Pointer entered the canvas. With the button held this starts a stroke.
    pub fn pointer_entered(&mut self, x: i32, y: i32, t: u64, pressed: bool) -> Result<()> {
        if pressed && self.collecting.is_none() {
            self.start_stroke(x, y, t)?;
        }
        Ok(())
    }

    /// Pointer left the canvas. A stroke still collecting is finished here.
    pub fn pointer_exited(
        &mut self,
        x: i32,
        y: i32,
        t: u64,
        pressed: bool,
    ) -> Result<Option<PassReport>> {
        if pressed && self.collecting.is_some() {
            return self.end_stroke(x, y, t).map(Some);
        }
        Ok(None)
    }

    /// Drop the samples collected so far. Returns whether a stroke was active.
    pub fn cancel_stroke(&mut self) -> bool {
        self.collecting.take().is_some()
    }

    /// Samples of the stroke being collected (empty when idle).
    pub fn current_samples(&self) -> &[TimedPoint] {
        self.collecting.as_deref().unwrap_or(&[])
    }

    #[inline]
    pub fn is_collecting(&self) -> bool {
        self.collecting.is_some()
    }

    // --- classification -----------------------------------------------------

    /// Run one full pass for a finished stroke.
    pub fn classify_stroke(&mut self, stroke: Stroke) -> Result<PassReport> {
        let mut report = PassReport::default();
        if let Some(shape) = self.shape_classifier.classify(stroke) {
            report.shape = Some(shape.kind());
            self.pending.push(shape);
        }

        let offset = self.pending.len().saturating_sub(self.cfg.max_pending_shapes);
        if let Some(found) = self.item_classifier.classify(&self.pending[offset..])? {
            let mut consumed = found.consumed;
            consumed.sort_unstable();
            consumed.dedup();
            for &i in consumed.iter().rev() {
                if offset + i < self.pending.len() {
                    self.pending.remove(offset + i);
                } else {
                    warn!(index = i, "consumed index outside the pending window; ignored");
                }
            }
            report.item = Some(found.item.kind());
            self.items.push(found.item);
        }

        report.correction = self.action_classifier.correct(&mut self.items)?;
        debug!(
            pending = self.pending.len(),
            items = self.items.len(),
            "pass_done"
        );
        Ok(report)
    }

    // --- queries and collaborator hooks -------------------------------------

    /// Pending (unconsumed) shapes, oldest first.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.pending.iter()
    }

    /// Recognized items, in recognition order.
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    #[inline]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Result<&mut Item> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(Error::ItemIndex { index, len })
    }

    /// Move an item, as the simulation collaborator does every step.
    pub fn update_position(&mut self, index: usize, p: Point) -> Result<()> {
        self.item_mut(index)?.update_position(p);
        Ok(())
    }

    /// Restore one item to its recognized position.
    pub fn reset_position(&mut self, index: usize) -> Result<()> {
        self.item_mut(index)?.reset_position();
        Ok(())
    }

    /// Restore every item to its recognized position and outline.
    pub fn reset_positions(&mut self) {
        for item in self.items.iter_mut() {
            item.reset_position();
        }
    }

    /// Forget pending shapes, items, and any stroke in progress.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.items.clear();
        self.collecting = None;
    }
}

#[cfg(test)]
mod tests;
