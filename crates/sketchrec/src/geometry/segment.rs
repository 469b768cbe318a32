//! Segment and infinite-line predicates on integer points.
//!
//! All functions are total: zero-length segments and parallel lines return
//! `None`/`false`/distance-to-endpoint instead of dividing by zero.

use super::types::Point;

/// Distance from `p` to the closed segment `a–b`.
///
/// A zero-length segment degrades to the distance from `p` to `a`.
pub fn distance_to_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    let ab = b.as_vec() - a.as_vec();
    let ap = p.as_vec() - a.as_vec();
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return ap.norm();
    }
    let s = (ap.dot(&ab) / len2).clamp(0.0, 1.0);
    (ap - ab * s).norm()
}

/// Whether `p` lies on segment `a–b` within `tol` pixels.
#[inline]
pub fn is_on_segment(p: &Point, a: &Point, b: &Point, tol: f64) -> bool {
    distance_to_segment(p, a, b) <= tol
}

/// Intersection of the infinite lines through `a1–b1` and `a2–b2`, rounded to
/// the nearest pixel.
///
/// `None` when the lines are parallel (including collinear) or either pair of
/// points coincides.
pub fn line_intersection(a1: &Point, b1: &Point, a2: &Point, b2: &Point) -> Option<Point> {
    if a1 == b1 || a2 == b2 {
        return None;
    }
    let d1 = (b1.x as i64 - a1.x as i64, b1.y as i64 - a1.y as i64);
    let d2 = (b2.x as i64 - a2.x as i64, b2.y as i64 - a2.y as i64);
    if d1.0 * d2.1 - d1.1 * d2.0 == 0 {
        return None;
    }
    let (x, y) = match (a1.slope_to(b1), a2.slope_to(b2)) {
        // Both vertical is excluded by the parallel test above.
        (None, None) => return None,
        (None, Some(m2)) => {
            let x = a1.x as f64;
            (x, m2 * (x - a2.x as f64) + a2.y as f64)
        }
        (Some(m1), None) => {
            let x = a2.x as f64;
            (x, m1 * (x - a1.x as f64) + a1.y as f64)
        }
        (Some(m1), Some(m2)) => {
            let c1 = a1.y as f64 - m1 * a1.x as f64;
            let c2 = a2.y as f64 - m2 * a2.x as f64;
            let x = (c2 - c1) / (m1 - m2);
            (x, m1 * x + c1)
        }
    };
    if !(x.is_finite() && y.is_finite()) {
        return None;
    }
    Some(Point::new(x.round() as i32, y.round() as i32))
}

/// Crossing point of the bounded segments `a1–b1` and `a2–b2`.
///
/// The infinite-line intersection must lie on both segments within `tol`.
pub fn segment_intersection(
    a1: &Point,
    b1: &Point,
    a2: &Point,
    b2: &Point,
    tol: f64,
) -> Option<Point> {
    let x = line_intersection(a1, b1, a2, b2)?;
    if is_on_segment(&x, a1, b1, tol) && is_on_segment(&x, a2, b2, tol) {
        Some(x)
    } else {
        None
    }
}
