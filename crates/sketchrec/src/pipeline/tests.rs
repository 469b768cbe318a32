//! End-to-end passes through `Sketch`.

use super::*;
use crate::synth::{cross_samples, polygon_samples, tap_samples, ReplayToken, StrokeCfg};

fn feed(sketch: &mut Sketch, samples: &[TimedPoint]) -> PassReport {
    let (first, rest) = samples.split_first().unwrap();
    let (last, middle) = rest.split_last().unwrap();
    sketch.start_stroke(first.point.x, first.point.y, first.t).unwrap();
    for s in middle {
        sketch.continue_stroke(s.point.x, s.point.y, s.t).unwrap();
    }
    sketch.end_stroke(last.point.x, last.point.y, last.t).unwrap()
}

fn square_corners() -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(100, 0),
        Point::new(100, 100),
        Point::new(0, 100),
    ]
}

fn tok(seed: u64) -> ReplayToken {
    ReplayToken { seed, index: 0 }
}

fn draw_square(sketch: &mut Sketch, cfg: StrokeCfg) -> Vec<PassReport> {
    polygon_samples(&square_corners(), cfg, tok(1))
        .iter()
        .map(|s| feed(sketch, s))
        .collect()
}

#[test]
fn square_then_cross_pins_region() {
    let mut sketch = Sketch::default();
    let reports = draw_square(&mut sketch, StrokeCfg::default());
    assert!(reports.iter().all(|r| r.shape == Some(ShapeKind::Line)));
    assert!(reports[..3].iter().all(|r| r.item.is_none()));
    assert_eq!(reports[3].item, Some(ItemKind::ClosedRegion));
    assert_eq!(sketch.shapes().count(), 0);
    assert_eq!(sketch.items().count(), 1);

    let region = sketch.item(0).unwrap().as_closed_region().unwrap();
    assert_eq!(region.outline().len(), 4);
    assert!(!region.is_anchored());

    let cross = cross_samples(Point::new(50, 50), 20, StrokeCfg::default(), tok(2));
    let r1 = feed(&mut sketch, &cross[0]);
    assert_eq!(r1.item, None);
    assert_eq!(sketch.shapes().count(), 1);
    let r2 = feed(&mut sketch, &cross[1]);
    assert_eq!(r2.item, Some(ItemKind::Anchor));
    assert_eq!(r2.correction, Some("anchor_region"));

    let items: Vec<_> = sketch.items().collect();
    assert_eq!(items.len(), 1);
    assert!(items[0].as_closed_region().unwrap().is_anchored());
    assert_eq!(sketch.shapes().count(), 0);
}

#[test]
fn jittered_square_still_closes() {
    let mut sketch = Sketch::default();
    let cfg = StrokeCfg {
        jitter_px: 1.5,
        ..Default::default()
    };
    let reports = draw_square(&mut sketch, cfg);
    assert!(reports.iter().all(|r| r.shape == Some(ShapeKind::Line)));
    assert_eq!(reports[3].item, Some(ItemKind::ClosedRegion));
}

#[test]
fn cross_outside_region_is_kept() {
    let mut sketch = Sketch::default();
    draw_square(&mut sketch, StrokeCfg::default());
    for s in cross_samples(Point::new(400, 400), 20, StrokeCfg::default(), tok(3)) {
        feed(&mut sketch, &s);
    }
    let kinds: Vec<_> = sketch.items().map(|i| i.kind()).collect();
    assert_eq!(kinds, vec![ItemKind::ClosedRegion, ItemKind::Anchor]);
    assert!(!sketch.item(0).unwrap().as_closed_region().unwrap().is_anchored());
}

#[test]
fn taps_stay_pending_next_to_a_region() {
    let mut sketch = Sketch::default();
    let r = feed(&mut sketch, &tap_samples(Point::new(300, 300), 0));
    assert_eq!(r.shape, Some(ShapeKind::Dot));
    assert_eq!(r.item, None);
    draw_square(&mut sketch, StrokeCfg::default());
    let pending: Vec<_> = sketch.shapes().map(|s| s.kind()).collect();
    assert_eq!(pending, vec![ShapeKind::Dot]);
    assert_eq!(sketch.items().count(), 1);
}

#[test]
fn pending_cap_hides_older_shapes() {
    let cfg = SketchCfg {
        max_pending_shapes: 3,
        ..Default::default()
    };
    let mut sketch = Sketch::with_defaults(cfg);
    let reports = draw_square(&mut sketch, StrokeCfg::default());
    assert!(reports.iter().all(|r| r.item.is_none()));
    assert_eq!(sketch.shapes().count(), 4);
    assert_eq!(sketch.items().count(), 0);
}

#[test]
fn gesture_state_errors() {
    let mut sketch = Sketch::default();
    assert!(matches!(sketch.continue_stroke(0, 0, 0), Err(Error::NoActiveStroke)));
    assert!(matches!(sketch.end_stroke(0, 0, 0), Err(Error::NoActiveStroke)));
    sketch.start_stroke(0, 0, 0).unwrap();
    assert!(matches!(sketch.start_stroke(1, 1, 1), Err(Error::StrokeInProgress)));
    sketch.continue_stroke(2, 2, 10).unwrap();
    assert_eq!(sketch.current_samples().len(), 2);
    assert!(sketch.cancel_stroke());
    assert!(!sketch.cancel_stroke());
    assert!(sketch.current_samples().is_empty());
    assert_eq!(sketch.shapes().count(), 0);
}

#[test]
fn enter_and_exit_frame_a_stroke() {
    let mut sketch = Sketch::default();
    sketch.pointer_entered(5, 5, 0, false).unwrap();
    assert!(!sketch.is_collecting());
    assert_eq!(sketch.pointer_exited(5, 5, 1, false).unwrap(), None);

    sketch.pointer_entered(5, 5, 0, true).unwrap();
    assert!(sketch.is_collecting());
    let report = sketch.pointer_exited(6, 5, 10, true).unwrap().unwrap();
    assert_eq!(report.shape, Some(ShapeKind::Dot));
    assert!(!sketch.is_collecting());
}

#[test]
fn no_recognizers_drop_every_stroke() {
    let mut sketch = Sketch::new(SketchCfg::default());
    let r = feed(&mut sketch, &tap_samples(Point::new(1, 1), 0));
    assert_eq!(r, PassReport::default());
    assert_eq!(sketch.shapes().count(), 0);
}

#[test]
fn positions_update_and_reset() {
    let mut sketch = Sketch::default();
    draw_square(&mut sketch, StrokeCfg::default());
    sketch.update_position(0, Point::new(500, 20)).unwrap();
    assert_eq!(sketch.item(0).unwrap().position(), Point::new(500, 20));
    sketch.reset_position(0).unwrap();
    assert_eq!(sketch.item(0).unwrap().position(), Point::new(50, 50));

    sketch.update_position(0, Point::new(7, 7)).unwrap();
    if let Some(region) = sketch.item_mut(0).unwrap().as_closed_region_mut() {
        region.set_outline(vec![Point::new(1, 1)]);
    }
    sketch.reset_positions();
    let item = sketch.item(0).unwrap();
    assert_eq!(item.position(), Point::new(50, 50));
    let region = item.as_closed_region().unwrap();
    assert_eq!(region.outline(), region.initial_outline());

    assert!(matches!(
        sketch.update_position(3, Point::new(0, 0)),
        Err(Error::ItemIndex { index: 3, len: 1 })
    ));
}

#[test]
fn clear_forgets_everything() {
    let mut sketch = Sketch::default();
    draw_square(&mut sketch, StrokeCfg::default());
    feed(&mut sketch, &tap_samples(Point::new(300, 300), 0));
    sketch.start_stroke(0, 0, 0).unwrap();
    sketch.clear();
    assert_eq!(sketch.shapes().count(), 0);
    assert_eq!(sketch.items().count(), 0);
    assert!(!sketch.is_collecting());
}

#[test]
fn far_apart_samples_classify_without_overflow() {
    let mut sketch = Sketch::default();
    let stroke = Stroke::new(&[
        TimedPoint::new(-2_000_000_000, 0, 0),
        TimedPoint::new(2_000_000_000, 0, 10),
        TimedPoint::new(2_000_000_001, 0, 20),
        TimedPoint::new(2_000_000_002, 0, 30),
    ])
    .unwrap();
    let report = sketch.classify_stroke(stroke).unwrap();
    assert_eq!(report.shape, Some(ShapeKind::Line));
    assert_eq!(report.item, None);
}
