//! JSON summary of a finished session.

use anyhow::{Context, Result};
use serde::Serialize;
use sketchrec::geometry::Point;
use sketchrec::item::Item;
use sketchrec::shape::Shape;
use sketchrec::{PassReport, Sketch};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct Summary {
    pub passes: usize,
    /// Strokes no shape recognizer accepted.
    pub dropped: usize,
    pub corrections: usize,
    pub shapes: Vec<ShapeOut>,
    pub items: Vec<ItemOut>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeOut {
    Dot { center: [i32; 2] },
    Line { start: [i32; 2], end: [i32; 2] },
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemOut {
    Anchor {
        center: [i32; 2],
        position: [i32; 2],
    },
    ClosedRegion {
        outline: Vec<[i32; 2]>,
        anchored: bool,
        position: [i32; 2],
    },
}

fn xy(p: Point) -> [i32; 2] {
    [p.x, p.y]
}

impl Summary {
    pub fn new(sketch: &Sketch, passes: &[PassReport]) -> Self {
        Self {
            passes: passes.len(),
            dropped: passes.iter().filter(|p| p.shape.is_none()).count(),
            corrections: passes.iter().filter(|p| p.correction.is_some()).count(),
            shapes: sketch.shapes().map(shape_out).collect(),
            items: sketch.items().filter_map(item_out).collect(),
        }
    }
}

fn shape_out(shape: &Shape) -> ShapeOut {
    match shape {
        Shape::Dot(d) => ShapeOut::Dot { center: xy(d.center()) },
        Shape::Line(l) => ShapeOut::Line {
            start: xy(l.start()),
            end: xy(l.end()),
        },
    }
}

fn item_out(item: &Item) -> Option<ItemOut> {
    match item {
        Item::Anchor(a) => Some(ItemOut::Anchor {
            center: xy(a.center()),
            position: xy(item.position()),
        }),
        Item::ClosedRegion(r) => Some(ItemOut::ClosedRegion {
            outline: r.outline().iter().copied().map(xy).collect(),
            anchored: r.is_anchored(),
            position: xy(item.position()),
        }),
        Item::Box(_) => {
            tracing::warn!(kind = %item.kind(), "item kind not exported; skipped");
            None
        }
    }
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use sketchrec::geometry::TimedPoint;
    use sketchrec::item::BoxItem;
    use sketchrec::shape::Line;
    use sketchrec::stroke::Stroke;
    use sketchrec::synth::{polygon_samples, tap_samples, ReplayToken, StrokeCfg};
    use tempfile::tempdir;

    fn square_session() -> (Sketch, Vec<PassReport>) {
        let corners = [
            Point::new(0, 0),
            Point::new(100, 0),
            Point::new(100, 100),
            Point::new(0, 100),
        ];
        let mut sketch = Sketch::default();
        let mut passes = Vec::new();
        let tok = ReplayToken { seed: 5, index: 0 };
        for s in polygon_samples(&corners, StrokeCfg::default(), tok) {
            passes.push(sketch.classify_stroke(Stroke::new(&s).unwrap()).unwrap());
        }
        let tap = tap_samples(Point::new(200, 200), 0);
        passes.push(sketch.classify_stroke(Stroke::new(&tap).unwrap()).unwrap());
        (sketch, passes)
    }

    #[test]
    fn summary_lists_region_and_leftover_dot() {
        let (sketch, passes) = square_session();
        let s = Summary::new(&sketch, &passes);
        assert_eq!(s.passes, 5);
        assert_eq!(s.dropped, 0);
        assert_eq!(s.shapes, vec![ShapeOut::Dot { center: [200, 200] }]);
        assert_eq!(s.items.len(), 1);
        match &s.items[0] {
            ItemOut::ClosedRegion {
                outline,
                anchored,
                position,
            } => {
                assert_eq!(outline.len(), 4);
                assert!(!anchored);
                assert_eq!(*position, [50, 50]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn box_items_are_skipped() {
        let line = |a: (i32, i32), b: (i32, i32)| {
            let samples = [TimedPoint::new(a.0, a.1, 0), TimedPoint::new(b.0, b.1, 10)];
            Line::new(Stroke::new(&samples).unwrap())
        };
        let b = Item::Box(BoxItem::new(vec![line((0, 0), (10, 0)), line((10, 0), (10, 10))]));
        assert!(item_out(&b).is_none());
    }

    #[test]
    fn write_json_creates_dirs() {
        let (sketch, passes) = square_session();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/summary.json");
        write_json(&path, &Summary::new(&sketch, &passes)).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed["items"][0]["kind"], "closed_region");
        assert_eq!(parsed["shapes"][0]["kind"], "dot");
        assert_eq!(parsed["passes"], 5);
    }
}
