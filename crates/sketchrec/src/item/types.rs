//! Recognized items: anchors, closed regions, and boxes.
//!
//! Every item owns the shapes it absorbed, caches their union bounds, and
//! carries a mutable position (initially the bounds center) that a physics
//! collaborator may move and later reset.

use std::fmt;

use crate::geometry::{Bounds, Point};
use crate::shape::{Line, Shape};

/// Discriminant of [`Item`], for logging and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Anchor,
    ClosedRegion,
    Box,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Anchor => f.write_str("anchor"),
            ItemKind::ClosedRegion => f.write_str("closed_region"),
            ItemKind::Box => f.write_str("box"),
        }
    }
}

/// State shared by every item variant.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemCore {
    shapes: Vec<Shape>,
    bounds: Bounds,
    position: Point,
}

impl ItemCore {
    pub fn new(shapes: Vec<Shape>) -> Self {
        let boxes: Vec<Bounds> = shapes.iter().map(Shape::bounds).collect();
        let bounds = Bounds::union_all(&boxes);
        Self {
            shapes,
            bounds,
            position: bounds.center(),
        }
    }

    fn from_lines(lines: Vec<Line>) -> Self {
        Self::new(lines.into_iter().map(Shape::Line).collect())
    }
}

/// A crossing mark ("X") made of two lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor {
    core: ItemCore,
    center: Point,
}

impl Anchor {
    /// `center` is the crossing point of the two segments.
    pub fn new(l1: Line, l2: Line, center: Point) -> Self {
        Self {
            core: ItemCore::from_lines(vec![l1, l2]),
            center,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
}

/// A closed polygon assembled from loose line segments.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosedRegion {
    core: ItemCore,
    outline: Vec<Point>,
    initial_outline: Vec<Point>,
    anchored: bool,
}

impl ClosedRegion {
    /// `lines` must be in loop order: line `i` meets line `i + 1`, and the last
    /// meets the first.
    ///
    /// Outline vertex `i` is the midpoint of the nearest endpoint pair of lines
    /// `i` and `i + 1`.
    pub fn new(lines: Vec<Line>) -> Self {
        let n = lines.len();
        let mut outline = Vec::with_capacity(n);
        for i in 0..n {
            let a = &lines[i];
            let b = &lines[(i + 1) % n];
            let pairs = [
                (a.start(), b.start()),
                (a.start(), b.end()),
                (a.end(), b.start()),
                (a.end(), b.end()),
            ];
            let mut best = pairs[0];
            let mut min = f64::INFINITY;
            for (p, q) in pairs {
                let d = p.distance_to(&q);
                if d < min {
                    min = d;
                    best = (p, q);
                }
            }
            outline.push(best.0.midpoint(&best.1));
        }
        Self {
            core: ItemCore::from_lines(lines),
            initial_outline: outline.clone(),
            outline,
            anchored: false,
        }
    }

    #[inline]
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// Outline as first recognized.
    #[inline]
    pub fn initial_outline(&self) -> &[Point] {
        &self.initial_outline
    }

    /// Replace the current outline (simulation moves vertices).
    pub fn set_outline(&mut self, outline: Vec<Point>) {
        self.outline = outline;
    }

    #[inline]
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    #[inline]
    pub fn set_anchored(&mut self, anchored: bool) {
        self.anchored = anchored;
    }
}

/// A four-sided box. No recognizer produces one yet.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxItem {
    core: ItemCore,
    outline: Vec<Point>,
}

impl BoxItem {
    /// Corner `i` joins the end of line `i` and the start of line `i + 1`.
    pub fn new(lines: Vec<Line>) -> Self {
        let n = lines.len();
        let outline = (0..n)
            .map(|i| lines[(i + 1) % n].start().midpoint(&lines[i].end()))
            .collect();
        Self {
            core: ItemCore::from_lines(lines),
            outline,
        }
    }

    #[inline]
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }
}

/// A recognized structural item.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Anchor(Anchor),
    ClosedRegion(ClosedRegion),
    Box(BoxItem),
}

impl Item {
    #[inline]
    fn core(&self) -> &ItemCore {
        match self {
            Item::Anchor(a) => &a.core,
            Item::ClosedRegion(r) => &r.core,
            Item::Box(b) => &b.core,
        }
    }

    #[inline]
    fn core_mut(&mut self) -> &mut ItemCore {
        match self {
            Item::Anchor(a) => &mut a.core,
            Item::ClosedRegion(r) => &mut r.core,
            Item::Box(b) => &mut b.core,
        }
    }

    #[inline]
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Anchor(_) => ItemKind::Anchor,
            Item::ClosedRegion(_) => ItemKind::ClosedRegion,
            Item::Box(_) => ItemKind::Box,
        }
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.core().shapes
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.core().bounds
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.core().position
    }

    #[inline]
    pub fn update_position(&mut self, p: Point) {
        self.core_mut().position = p;
    }

    /// Back to the recognized position; regions also restore their outline.
    pub fn reset_position(&mut self) {
        let core = self.core_mut();
        core.position = core.bounds.center();
        if let Item::ClosedRegion(r) = self {
            r.outline = r.initial_outline.clone();
        }
    }

    #[inline]
    pub fn as_anchor(&self) -> Option<&Anchor> {
        match self {
            Item::Anchor(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn as_closed_region(&self) -> Option<&ClosedRegion> {
        match self {
            Item::ClosedRegion(r) => Some(r),
            _ => None,
        }
    }

    #[inline]
    pub fn as_closed_region_mut(&mut self) -> Option<&mut ClosedRegion> {
        match self {
            Item::ClosedRegion(r) => Some(r),
            _ => None,
        }
    }
}
