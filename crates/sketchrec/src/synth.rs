//! Synthetic pen strokes (straight segments with perpendicular jitter).
//!
//! Purpose
//! - Deterministic gesture input for tests, benchmarks, and the CLI demo.
//!
//! Model
//! - A segment is sampled every `step_px` pixels, one sample per `dt_ms`.
//! - Interior samples are pushed sideways by up to `jitter_px`; endpoints stay
//!   exact so consecutive polygon sides meet head-to-tail.
//! - Reproducibility uses a replay token `(seed, index)` mixed into one RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::geometry::{Point, TimedPoint};
use crate::stroke::Stroke;

/// Sampling configuration for synthetic strokes.
#[derive(Clone, Copy, Debug)]
pub struct StrokeCfg {
    /// Distance between consecutive samples along the segment.
    pub step_px: f64,
    /// Max perpendicular offset of interior samples.
    pub jitter_px: f64,
    /// Time between consecutive samples.
    pub dt_ms: u64,
}

impl Default for StrokeCfg {
    fn default() -> Self {
        Self {
            step_px: 5.0,
            jitter_px: 0.0,
            dt_ms: 10,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Samples of one straight gesture from `from` to `to`, starting at time `t0`.
pub fn line_samples<R: Rng>(
    from: Point,
    to: Point,
    t0: u64,
    cfg: StrokeCfg,
    rng: &mut R,
) -> Vec<TimedPoint> {
    let a = from.as_vec();
    let b = to.as_vec();
    let d = b - a;
    let len = d.norm();
    let steps = ((len / cfg.step_px.max(1e-9)).ceil() as usize).max(1);
    let normal = if len > 0.0 {
        Vector2::new(-d.y, d.x) / len
    } else {
        Vector2::zeros()
    };
    let jitter = cfg.jitter_px.max(0.0);
    (0..=steps)
        .map(|i| {
            let s = i as f64 / steps as f64;
            let mut v = a + d * s;
            if i != 0 && i != steps && jitter > 0.0 {
                v += normal * rng.gen_range(-jitter..=jitter);
            }
            let p = Point::from_vec(v);
            TimedPoint::new(p.x, p.y, t0 + i as u64 * cfg.dt_ms)
        })
        .collect()
}

/// Convenience: [`line_samples`] built into a [`Stroke`].
pub fn line_stroke<R: Rng>(
    from: Point,
    to: Point,
    t0: u64,
    cfg: StrokeCfg,
    rng: &mut R,
) -> Result<Stroke> {
    Stroke::new(&line_samples(from, to, t0, cfg, rng))
}

/// A two-sample tap at `at`.
pub fn tap_samples(at: Point, t0: u64) -> Vec<TimedPoint> {
    vec![
        TimedPoint::new(at.x, at.y, t0),
        TimedPoint::new(at.x, at.y, t0 + 1),
    ]
}

/// One gesture per polygon side, traced head-to-tail and closing back on the
/// first corner. Gestures are spaced in time so timestamps stay monotonic.
pub fn polygon_samples(corners: &[Point], cfg: StrokeCfg, tok: ReplayToken) -> Vec<Vec<TimedPoint>> {
    let mut rng = tok.to_std_rng();
    let n = corners.len();
    let mut t = 0;
    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let s = line_samples(corners[k], corners[(k + 1) % n], t, cfg, &mut rng);
        t = s.last().map_or(t, |p| p.t) + 100;
        out.push(s);
    }
    out
}

/// Two crossing diagonals of the square of half-width `half` around `center`.
pub fn cross_samples(center: Point, half: i32, cfg: StrokeCfg, tok: ReplayToken) -> Vec<Vec<TimedPoint>> {
    let mut rng = tok.to_std_rng();
    let (cx, cy) = (center.x, center.y);
    let first = line_samples(
        Point::new(cx - half, cy - half),
        Point::new(cx + half, cy + half),
        0,
        cfg,
        &mut rng,
    );
    let t = first.last().map_or(0, |p| p.t) + 100;
    let second = line_samples(
        Point::new(cx + half, cy - half),
        Point::new(cx - half, cy + half),
        t,
        cfg,
        &mut rng,
    );
    vec![first, second]
}

/// Corners of a regular `n`-gon of radius `r` around `center`.
pub fn regular_polygon(center: Point, r: f64, n: usize) -> Vec<Point> {
    let n = n.max(3);
    (0..n)
        .map(|k| {
            let th = std::f64::consts::TAU * k as f64 / n as f64;
            Point::from_vec(center.as_vec() + Vector2::new(th.cos(), th.sin()) * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_samples_hit_both_endpoints() {
        let mut rng = StdRng::seed_from_u64(3);
        let cfg = StrokeCfg {
            jitter_px: 2.0,
            ..Default::default()
        };
        let s = line_samples(Point::new(0, 0), Point::new(100, 0), 50, cfg, &mut rng);
        assert_eq!(s.len(), 21);
        assert_eq!(s[0].point, Point::new(0, 0));
        assert_eq!(s[20].point, Point::new(100, 0));
        assert_eq!(s[0].t, 50);
        assert_eq!(s[20].t, 250);
        assert!(s.iter().all(|p| p.point.y.abs() <= 2));
    }

    #[test]
    fn replay_is_deterministic() {
        let cfg = StrokeCfg {
            jitter_px: 3.0,
            ..Default::default()
        };
        let tok = ReplayToken { seed: 9, index: 2 };
        let corners = regular_polygon(Point::new(200, 200), 80.0, 5);
        assert_eq!(polygon_samples(&corners, cfg, tok), polygon_samples(&corners, cfg, tok));
    }

    #[test]
    fn polygon_sides_close() {
        let corners = [Point::new(0, 0), Point::new(50, 0), Point::new(50, 50)];
        let strokes = polygon_samples(&corners, StrokeCfg::default(), ReplayToken { seed: 0, index: 0 });
        assert_eq!(strokes.len(), 3);
        for k in 0..3 {
            let next = &strokes[(k + 1) % 3];
            assert_eq!(strokes[k].last().unwrap().point, next[0].point);
        }
        assert!(strokes[1][0].t > strokes[0].last().unwrap().t);
    }
}
