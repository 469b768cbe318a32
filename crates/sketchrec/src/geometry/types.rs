//! Point, timestamped point, and angle value types.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use nalgebra::Vector2;

/// Integer screen point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_vec(&self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }

    /// Nearest integer point to a real-valued position.
    #[inline]
    pub fn from_vec(v: Vector2<f64>) -> Self {
        Self {
            x: v.x.round() as i32,
            y: v.y.round() as i32,
        }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance_to(&self, that: &Point) -> f64 {
        (that.as_vec() - self.as_vec()).norm()
    }

    /// Integer midpoint (truncates toward zero like the pixel grid it lives on).
    #[inline]
    pub fn midpoint(&self, that: &Point) -> Point {
        let mx = (self.x as i64 + that.x as i64) / 2;
        let my = (self.y as i64 + that.y as i64) / 2;
        Point::new(mx as i32, my as i32)
    }

    /// Direction from `self` toward `that`; `0` is rightward.
    ///
    /// Coincident points have heading `0`.
    #[inline]
    pub fn heading_to(&self, that: &Point) -> Angle {
        let dx = (that.x as i64 - self.x as i64) as f64;
        let dy = (that.y as i64 - self.y as i64) as f64;
        Angle::new(dy.atan2(dx))
    }

    /// Slope `dy/dx` of the line through both points; `None` when vertical.
    #[inline]
    pub fn slope_to(&self, that: &Point) -> Option<f64> {
        let dx = that.x as i64 - self.x as i64;
        if dx == 0 {
            return None;
        }
        Some((that.y as i64 - self.y as i64) as f64 / dx as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A point sampled at a monotonic timestamp (milliseconds).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedPoint {
    pub point: Point,
    pub t: u64,
}

impl TimedPoint {
    #[inline]
    pub const fn new(x: i32, y: i32, t: u64) -> Self {
        Self {
            point: Point::new(x, y),
            t,
        }
    }
}

/// Radian angle with circular comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    #[inline]
    pub const fn new(radians: f64) -> Self {
        Self(radians)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Shorter arc between two angles, in `[0, π]`.
    pub fn between(&self, that: &Angle) -> Angle {
        let diff = (self.0 - that.0).abs().rem_euclid(TAU);
        if diff > PI {
            Angle(TAU - diff)
        } else {
            Angle(diff)
        }
    }

    /// Angle between the undirected lines carrying these headings, in `[0, π/2]`.
    pub fn acute_between(&self, that: &Angle) -> Angle {
        let a = self.between(that).0;
        if a > FRAC_PI_2 {
            Angle(PI - a)
        } else {
            Angle(a)
        }
    }
}
