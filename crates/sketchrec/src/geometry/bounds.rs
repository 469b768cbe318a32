//! Axis-aligned bounding boxes over integer points.

use super::types::Point;

/// Axis-aligned box given by its `(min, max)` corners.
///
/// Invariants:
/// - `Bounds::empty()` stores `min = +∞`, `max = −∞` (as `i32` extremes) and is
///   only meaningful after at least one `expand_*` call.
/// - Once non-empty: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    /// Sentinel that contains nothing; expand it before use.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            min: Point::new(i32::MAX, i32::MAX),
            max: Point::new(i32::MIN, i32::MIN),
        }
    }

    /// Box spanned by two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut b = Self::empty();
        for p in points {
            b.expand_point(p);
        }
        b
    }

    /// Smallest box containing every box in `boxes`.
    pub fn union_all<'a, I>(boxes: I) -> Self
    where
        I: IntoIterator<Item = &'a Bounds>,
    {
        let mut b = Self::empty();
        for other in boxes {
            b.expand(other);
        }
        b
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    pub fn expand_point(&mut self, p: &Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Grow to contain `other`; expanding by an empty box is a no-op.
    pub fn expand(&mut self, other: &Bounds) {
        if other.is_empty() {
            return;
        }
        self.expand_point(&other.min);
        self.expand_point(&other.max);
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (self.max.x as i64 - self.min.x as i64) as f64
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (self.max.y as i64 - self.min.y as i64) as f64
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Integer center; an empty box reports the origin.
    pub fn center(&self) -> Point {
        if self.is_empty() {
            return Point::default();
        }
        self.min.midpoint(&self.max)
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        !self.is_empty()
            && self.min.x <= p.x
            && p.x <= self.max.x
            && self.min.y <= p.y
            && p.y <= self.max.y
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        !other.is_empty() && self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Common box of two boxes, if they touch at all.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        let out = Bounds {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }

    /// Fraction of `self`'s area covered by `other`, in `[0, 1]`.
    ///
    /// Not symmetric. A zero-area `self` yields `0`.
    pub fn overlap(&self, other: &Bounds) -> f64 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        match self.intersection(other) {
            Some(common) => common.area() / area,
            None => 0.0,
        }
    }
}
