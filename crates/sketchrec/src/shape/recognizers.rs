//! Stroke recognizers: dot (tap) and straight line.

use std::f64::consts::{PI, TAU};

use crate::cfg::SketchCfg;
use crate::stroke::Stroke;

use super::types::{Dot, Line, Shape};

/// Scores one stroke against one primitive and builds that primitive.
///
/// `score` is a gauge in `[0, 1]` used only to rank recognizers against each
/// other. `materialize` is called only after a positive score.
pub trait ShapeRecognizer {
    fn name(&self) -> &'static str;
    fn score(&self, stroke: &Stroke) -> f64;
    fn materialize(&self, stroke: Stroke) -> Shape;
}

/// Favors short, tap-like strokes; decays as `1/n` with sample count.
#[derive(Clone, Copy, Debug)]
pub struct DotRecognizer {
    max_samples: usize,
}

impl DotRecognizer {
    pub fn new(cfg: &SketchCfg) -> Self {
        Self {
            max_samples: cfg.dot_max_samples,
        }
    }
}

impl Default for DotRecognizer {
    fn default() -> Self {
        Self::new(&SketchCfg::default())
    }
}

impl ShapeRecognizer for DotRecognizer {
    fn name(&self) -> &'static str {
        "dot"
    }

    fn score(&self, stroke: &Stroke) -> f64 {
        let n = stroke.len();
        if n < self.max_samples {
            1.0
        } else {
            1.0 / n as f64
        }
    }

    fn materialize(&self, stroke: Stroke) -> Shape {
        Shape::Dot(Dot::new(stroke))
    }
}

/// Scores by the spread of sample-to-sample headings: `1 − spread/π`.
///
/// Headings are measured as signed offsets from the first one, so the spread
/// does not depend on where the stroke points.
#[derive(Clone, Copy, Debug)]
pub struct LineRecognizer {
    min_samples: usize,
}

impl LineRecognizer {
    pub fn new(cfg: &SketchCfg) -> Self {
        Self {
            min_samples: cfg.line_min_samples.max(2),
        }
    }
}

impl Default for LineRecognizer {
    fn default() -> Self {
        Self::new(&SketchCfg::default())
    }
}

impl ShapeRecognizer for LineRecognizer {
    fn name(&self) -> &'static str {
        "line"
    }

    fn score(&self, stroke: &Stroke) -> f64 {
        if stroke.len() < self.min_samples {
            return 0.0;
        }
        let mut first: Option<f64> = None;
        let mut min = 0.0f64;
        let mut max = 0.0f64;
        let mut iter = stroke.iter();
        let Some(mut last) = iter.next() else {
            return 0.0;
        };
        for curr in iter {
            // Repeated samples carry no direction.
            if curr.point() == last.point() {
                continue;
            }
            let h = last.point().heading_to(&curr.point()).value();
            last = curr;
            let Some(h0) = first else {
                first = Some(h);
                continue;
            };
            // Signed offset from the first heading, in [-π, π).
            let d = (h - h0 + PI).rem_euclid(TAU) - PI;
            min = min.min(d);
            max = max.max(d);
        }
        if first.is_none() {
            return 0.0;
        }
        1.0 - (max - min).min(PI) / PI
    }

    fn materialize(&self, stroke: Stroke) -> Shape {
        Shape::Line(Line::new(stroke))
    }
}
