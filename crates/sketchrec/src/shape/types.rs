//! Shape variants and line geometry.

use std::fmt;

use crate::geometry::{
    is_on_segment, line_intersection, segment_intersection, Angle, Bounds, Point,
    ON_SEGMENT_TOL_PX,
};
use crate::stroke::Stroke;

/// Discriminant of [`Shape`], for logging and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Dot,
    Line,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Dot => f.write_str("dot"),
            ShapeKind::Line => f.write_str("line"),
        }
    }
}

/// A classified primitive. Owns the strokes that produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Dot(Dot),
    Line(Line),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Dot(_) => ShapeKind::Dot,
            Shape::Line(_) => ShapeKind::Line,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Dot(d) => d.bounds,
            Shape::Line(l) => l.bounds,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        match self {
            Shape::Dot(d) => &d.strokes,
            Shape::Line(l) => &l.strokes,
        }
    }

    #[inline]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Shape::Line(l) => Some(l),
            _ => None,
        }
    }

    #[inline]
    pub fn as_dot(&self) -> Option<&Dot> {
        match self {
            Shape::Dot(d) => Some(d),
            _ => None,
        }
    }
}

fn bounds_of(strokes: &[Stroke]) -> Bounds {
    let boxes: Vec<Bounds> = strokes.iter().map(Stroke::bounds).collect();
    Bounds::union_all(&boxes)
}

/// A tap.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    strokes: Vec<Stroke>,
    bounds: Bounds,
}

impl Dot {
    pub fn new(stroke: Stroke) -> Self {
        let strokes = vec![stroke];
        let bounds = bounds_of(&strokes);
        Self { strokes, bounds }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A straight segment from the first to the last sample of its stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    strokes: Vec<Stroke>,
    bounds: Bounds,
}

impl Line {
    pub fn new(stroke: Stroke) -> Self {
        let strokes = vec![stroke];
        let bounds = bounds_of(&strokes);
        Self { strokes, bounds }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// First sample of the first stroke (the tail).
    #[inline]
    pub fn start(&self) -> Point {
        self.strokes[0].first().point()
    }

    /// Last sample of the last stroke (the head).
    #[inline]
    pub fn end(&self) -> Point {
        self.strokes[self.strokes.len() - 1].last().point()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance_to(&self.end())
    }

    /// Absolute heading from start to end.
    #[inline]
    pub fn heading(&self) -> Angle {
        self.start().heading_to(&self.end())
    }

    /// Angle between the two undirected lines, in `[0, π/2]`.
    #[inline]
    pub fn acute_angle_to(&self, that: &Line) -> Angle {
        self.heading().acute_between(&that.heading())
    }

    /// Whether `p` lies on this segment within [`ON_SEGMENT_TOL_PX`].
    #[inline]
    pub fn is_on(&self, p: &Point) -> bool {
        is_on_segment(p, &self.start(), &self.end(), ON_SEGMENT_TOL_PX)
    }

    /// Crossing point of the two bounded segments.
    pub fn segment_intersection(&self, that: &Line) -> Option<Point> {
        segment_intersection(
            &self.start(),
            &self.end(),
            &that.start(),
            &that.end(),
            ON_SEGMENT_TOL_PX,
        )
    }

    /// Intersection of the two infinite lines.
    pub fn intersection(&self, that: &Line) -> Option<Point> {
        line_intersection(&self.start(), &self.end(), &that.start(), &that.end())
    }
}
