//! Criterion benches for loop assembly and a full recognition pass.
//! Sizes: n-gon sides in {4, 8, 16, 32}.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sketchrec::geometry::Point;
use sketchrec::item::loop_search::find_loop;
use sketchrec::shape::Line;
use sketchrec::stroke::Stroke;
use sketchrec::synth::{polygon_samples, regular_polygon, ReplayToken, StrokeCfg};
use sketchrec::{Sketch, SketchCfg};

fn ngon_samples(n: usize, seed: u64) -> Vec<Vec<sketchrec::geometry::TimedPoint>> {
    let corners = regular_polygon(Point::new(400, 400), 300.0, n);
    let cfg = StrokeCfg {
        jitter_px: 1.0,
        ..Default::default()
    };
    polygon_samples(&corners, cfg, ReplayToken { seed, index: n as u64 })
}

fn ngon_lines(n: usize, seed: u64) -> Vec<Line> {
    ngon_samples(n, seed)
        .iter()
        .map(|s| Line::new(Stroke::new(s).unwrap()))
        .collect()
}

fn bench_loop_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_search");
    for &n in &[4usize, 8, 16, 32] {
        let lines = ngon_lines(n, 7);
        group.bench_with_input(BenchmarkId::new("find_loop", n), &n, |b, _| {
            let refs: Vec<&Line> = lines.iter().collect();
            b.iter(|| {
                let _ = find_loop(&refs, 3);
            })
        });
    }
    group.finish();
}

fn bench_sketch_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("sketch");
    for &n in &[4usize, 8, 16] {
        let strokes = ngon_samples(n, 11);
        group.bench_with_input(BenchmarkId::new("draw_ngon", n), &n, |b, _| {
            b.iter_batched(
                || Sketch::with_defaults(SketchCfg::default()),
                |mut sketch| {
                    for s in &strokes {
                        let _ = sketch.classify_stroke(Stroke::new(s).unwrap());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_loop_search, bench_sketch_pass);
criterion_main!(benches);
