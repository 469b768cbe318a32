//! Draw a square and an X through the gesture API and print what each pass found.
//!
//! Usage:
//!   cargo run -p sketchrec --example session -- [seed]

use sketchrec::geometry::{Point, TimedPoint};
use sketchrec::synth::{cross_samples, polygon_samples, ReplayToken, StrokeCfg};
use sketchrec::{Result, Sketch};

fn feed(sketch: &mut Sketch, samples: &[TimedPoint]) -> Result<()> {
    let Some((first, rest)) = samples.split_first() else {
        return Ok(());
    };
    sketch.start_stroke(first.point.x, first.point.y, first.t)?;
    let Some((last, middle)) = rest.split_last() else {
        sketch.cancel_stroke();
        return Ok(());
    };
    for s in middle {
        sketch.continue_stroke(s.point.x, s.point.y, s.t)?;
    }
    let report = sketch.end_stroke(last.point.x, last.point.y, last.t)?;
    println!(
        "shape={:?} item={:?} correction={:?}",
        report.shape, report.item, report.correction
    );
    Ok(())
}

fn main() -> Result<()> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let cfg = StrokeCfg {
        jitter_px: 1.0,
        ..Default::default()
    };
    let corners = [
        Point::new(100, 100),
        Point::new(300, 100),
        Point::new(300, 300),
        Point::new(100, 300),
    ];
    let mut sketch = Sketch::default();
    for s in polygon_samples(&corners, cfg, ReplayToken { seed, index: 0 }) {
        feed(&mut sketch, &s)?;
    }
    for s in cross_samples(Point::new(200, 200), 40, cfg, ReplayToken { seed, index: 1 }) {
        feed(&mut sketch, &s)?;
    }
    for (i, item) in sketch.items().enumerate() {
        let anchored = item.as_closed_region().map(|r| r.is_anchored());
        println!(
            "item {i}: {} at {} anchored={:?}",
            item.kind(),
            item.position(),
            anchored
        );
    }
    Ok(())
}
