//! Pen strokes: the timestamped samples of one finished gesture.
//!
//! Model
//! - A `Stroke` is built once from a press→release (or enter→exit) gesture and
//!   never mutated afterwards. `Clone` is a deep copy.
//! - Every interior sample carries the pen speed derived from its two temporal
//!   neighbours; the first and last sample have speed `0` by definition.

use std::slice;

use crate::error::{Error, Result};
use crate::geometry::{Bounds, Point, TimedPoint};

/// A timestamped sample plus the pen speed there, in pixels per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityPoint {
    pub sample: TimedPoint,
    pub speed: f64,
}

impl VelocityPoint {
    #[inline]
    pub fn point(&self) -> Point {
        self.sample.point
    }

    #[inline]
    pub fn t(&self) -> u64 {
        self.sample.t
    }
}

/// Ordered, immutable, non-empty sequence of velocity samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<VelocityPoint>,
    bounds: Bounds,
}

impl Stroke {
    /// Build from raw samples in capture order.
    ///
    /// Fails with `Error::EmptyStroke` when `samples` is empty.
    pub fn new(samples: &[TimedPoint]) -> Result<Self> {
        let n = samples.len();
        if n == 0 {
            return Err(Error::EmptyStroke);
        }
        let mut points = Vec::with_capacity(n);
        for (i, s) in samples.iter().enumerate() {
            let speed = if i == 0 || i + 1 == n {
                0.0
            } else {
                speed_between(&samples[i - 1], &samples[i + 1])
            };
            points.push(VelocityPoint { sample: *s, speed });
        }
        let bounds = Bounds::from_points(samples.iter().map(|s| &s.point));
        Ok(Self { points, bounds })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&VelocityPoint> {
        self.points.get(i)
    }

    #[inline]
    pub fn first(&self) -> &VelocityPoint {
        &self.points[0]
    }

    #[inline]
    pub fn last(&self) -> &VelocityPoint {
        &self.points[self.points.len() - 1]
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, VelocityPoint> {
        self.points.iter()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl<'a> IntoIterator for &'a Stroke {
    type Item = &'a VelocityPoint;
    type IntoIter = slice::Iter<'a, VelocityPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Chord length between two samples over their time gap (ms → s).
fn speed_between(before: &TimedPoint, after: &TimedPoint) -> f64 {
    let dt_ms = after.t.saturating_sub(before.t);
    if dt_ms == 0 {
        return 0.0;
    }
    before.point.distance_to(&after.point) / (dt_ms as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert!(matches!(Stroke::new(&[]), Err(Error::EmptyStroke)));
    }

    #[test]
    fn endpoints_have_zero_speed() {
        let s = Stroke::new(&[
            TimedPoint::new(0, 0, 0),
            TimedPoint::new(3, 4, 10),
            TimedPoint::new(6, 8, 20),
        ])
        .unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.first().speed, 0.0);
        assert_eq!(s.last().speed, 0.0);
        // 10 px over 20 ms.
        assert!((s.get(1).unwrap().speed - 500.0).abs() < 1e-9);
    }

    #[test]
    fn zero_time_gap_is_guarded() {
        let s = Stroke::new(&[
            TimedPoint::new(0, 0, 5),
            TimedPoint::new(1, 1, 5),
            TimedPoint::new(2, 2, 5),
        ])
        .unwrap();
        assert_eq!(s.get(1).unwrap().speed, 0.0);
    }

    #[test]
    fn single_sample_stroke() {
        let s = Stroke::new(&[TimedPoint::new(7, 9, 1)]).unwrap();
        assert_eq!(s.first(), s.last());
        assert_eq!(s.bounds().min(), Point::new(7, 9));
        assert_eq!(s.bounds().max(), Point::new(7, 9));
    }

    #[test]
    fn clone_is_independent() {
        let s = Stroke::new(&[TimedPoint::new(0, 0, 0), TimedPoint::new(5, 0, 10)]).unwrap();
        let c = s.clone();
        drop(s);
        assert_eq!(c.len(), 2);
        assert_eq!(c.last().point(), Point::new(5, 0));
    }
}
