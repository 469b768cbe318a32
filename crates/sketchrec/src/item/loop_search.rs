//! Closed-region assembly: a greedy walk over line ends.
//!
//! Model
//! - Every line contributes two graph nodes, its head (last sample) and tail
//!   (first sample). Nodes are `LineEnd { line, end }` over a fixed line arena.
//! - Edge weight between two ends is [`connection_score`].
//! - From each starting end, the walk repeatedly jumps from its free end to the
//!   best-scoring admissible end, then continues from the far end of that line.
//!   A line is never revisited, except that the other end of the starting line
//!   closes the loop once at least `min_lines` lines are on the walk.
//! - Loop score = sum of used edge weights / number of lines. The best loop over
//!   all starting ends wins; ties keep the earlier start.

use tracing::debug;

use crate::error::{Error, Result};
use crate::shape::{Line, Shape};

use super::recognizer::{lines_of, ItemMatch, ItemRecognizer};
use super::types::{ClosedRegion, Item};

/// Which endpoint of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum End {
    /// Last sample.
    Head,
    /// First sample.
    Tail,
}

impl End {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            End::Head => End::Tail,
            End::Tail => End::Head,
        }
    }

    #[inline]
    pub fn point_of(self, line: &Line) -> crate::geometry::Point {
        match self {
            End::Head => line.end(),
            End::Tail => line.start(),
        }
    }
}

/// One endpoint of the line at index `line` in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineEnd {
    pub line: usize,
    pub end: End,
}

impl LineEnd {
    #[inline]
    pub fn new(line: usize, end: End) -> Self {
        Self { line, end }
    }

    /// Node `k` of the walk graph: `2i` is line `i`'s head, `2i + 1` its tail.
    #[inline]
    fn from_node(k: usize) -> Self {
        let end = if k % 2 == 0 { End::Head } else { End::Tail };
        Self { line: k / 2, end }
    }

    #[inline]
    fn node(self) -> usize {
        2 * self.line + usize::from(self.end == End::Tail)
    }

    #[inline]
    pub fn other(self) -> Self {
        Self {
            line: self.line,
            end: self.end.other(),
        }
    }

    #[inline]
    pub fn is_other_end_of(&self, that: &LineEnd) -> bool {
        self.line == that.line && self.end != that.end
    }
}

/// How plausibly two line ends join, in `[0, 1]`.
///
/// `(1 − overlap(b1, b2)) · (1 − overlap(b2, b1)) · (len1 − gap) · (len2 − gap) / (len1 · len2)`
/// where `gap` is the endpoint distance. A gap longer than either line and a
/// zero-length line both yield `0`.
pub fn connection_score(l1: &Line, e1: End, l2: &Line, e2: End) -> f64 {
    let (len1, len2) = (l1.length(), l2.length());
    if len1 <= 0.0 || len2 <= 0.0 {
        return 0.0;
    }
    let (b1, b2) = (l1.bounds(), l2.bounds());
    let gap = e1.point_of(l1).distance_to(&e2.point_of(l2));
    if gap > len1 || gap > len2 {
        return 0.0;
    }
    let gauge =
        (1.0 - b1.overlap(&b2)) * (1.0 - b2.overlap(&b1)) * (len1 - gap) * (len2 - gap) / (len1 * len2);
    gauge.max(0.0)
}

/// Walk state; trivially cloneable.
#[derive(Clone, Debug)]
struct Walk {
    root: LineEnd,
    free: LineEnd,
    prev: LineEnd,
    lines: Vec<usize>,
    on_walk: Vec<bool>,
    score_sum: f64,
}

impl Walk {
    fn new(root: LineEnd, num_lines: usize) -> Self {
        let mut on_walk = vec![false; num_lines];
        on_walk[root.line] = true;
        Self {
            root,
            free: root,
            prev: root,
            lines: vec![root.line],
            on_walk,
            score_sum: 0.0,
        }
    }

    fn admits(&self, le: LineEnd) -> bool {
        le != self.prev && (!self.on_walk[le.line] || le.is_other_end_of(&self.root))
    }

    fn push(&mut self, le: LineEnd, score: f64) {
        self.lines.push(le.line);
        self.on_walk[le.line] = true;
        self.prev = self.free;
        self.free = le.other();
        self.score_sum += score;
    }
}

/// Loop search over a fixed line arena with precomputed end-to-end scores.
struct LoopSearch<'a> {
    lines: &'a [&'a Line],
    min_lines: usize,
    scores: Vec<f64>, // row-major over nodes (2 per line)
}

impl<'a> LoopSearch<'a> {
    fn new(lines: &'a [&'a Line], min_lines: usize) -> Self {
        let n = 2 * lines.len();
        let mut scores = vec![0.0; n * n];
        for a in 0..n {
            for b in (a + 1)..n {
                let (la, lb) = (LineEnd::from_node(a), LineEnd::from_node(b));
                if la.line == lb.line {
                    continue;
                }
                let s = connection_score(lines[la.line], la.end, lines[lb.line], lb.end);
                scores[a * n + b] = s;
                scores[b * n + a] = s;
            }
        }
        Self {
            lines,
            min_lines: min_lines.max(2),
            scores,
        }
    }

    #[inline]
    fn score(&self, a: LineEnd, b: LineEnd) -> f64 {
        self.scores[a.node() * 2 * self.lines.len() + b.node()]
    }

    fn solve(&self) -> Option<(f64, Vec<usize>)> {
        if self.lines.len() < self.min_lines {
            return None;
        }
        let mut best: Option<(f64, Vec<usize>)> = None;
        for k in 0..2 * self.lines.len() {
            if let Some((score, order)) = self.walk_from(LineEnd::from_node(k)) {
                if best.as_ref().map_or(true, |(s, _)| score > *s) {
                    best = Some((score, order));
                }
            }
        }
        best
    }

    fn walk_from(&self, root: LineEnd) -> Option<(f64, Vec<usize>)> {
        let mut walk = Walk::new(root, self.lines.len());
        loop {
            let mut high = 0.0;
            let mut next = None;
            for k in 0..2 * self.lines.len() {
                let le = LineEnd::from_node(k);
                if !walk.admits(le) {
                    continue;
                }
                let s = self.score(le, walk.free);
                if s > high {
                    high = s;
                    next = Some(le);
                }
            }
            let le = next?;
            if le.is_other_end_of(&walk.root) {
                if walk.lines.len() < self.min_lines {
                    return None;
                }
                walk.score_sum += high;
                let n = walk.lines.len() as f64;
                return Some((walk.score_sum / n, walk.lines));
            }
            walk.push(le, high);
        }
    }
}

/// Best closed loop through `lines`: `(score, arena indices in loop order)`.
pub fn find_loop(lines: &[&Line], min_lines: usize) -> Option<(f64, Vec<usize>)> {
    LoopSearch::new(lines, min_lines).solve()
}

/// Assembles closed polygons from the pending lines.
#[derive(Debug)]
pub struct ClosedRegionRecognizer {
    min_lines: usize,
    found: Option<ItemMatch>,
}

impl ClosedRegionRecognizer {
    pub fn new(min_lines: usize) -> Self {
        Self {
            min_lines,
            found: None,
        }
    }
}

impl Default for ClosedRegionRecognizer {
    fn default() -> Self {
        Self::new(crate::SketchCfg::default().min_loop_lines)
    }
}

impl ItemRecognizer for ClosedRegionRecognizer {
    fn name(&self) -> &'static str {
        "closed_region"
    }

    fn score(&mut self, shapes: &[Shape]) -> f64 {
        self.found = None;
        let indexed = lines_of(shapes);
        let arena: Vec<&Line> = indexed.iter().map(|(_, l)| *l).collect();
        let Some((score, order)) = find_loop(&arena, self.min_lines) else {
            return 0.0;
        };
        debug!(lines = order.len(), score, "closed_loop");
        let consumed = order.iter().map(|&k| indexed[k].0).collect();
        let lines = order.iter().map(|&k| arena[k].clone()).collect();
        self.found = Some(ItemMatch {
            item: Item::ClosedRegion(ClosedRegion::new(lines)),
            consumed,
        });
        score
    }

    fn materialized_item(&mut self) -> Result<ItemMatch> {
        self.found.take().ok_or(Error::NotFound {
            recognizer: self.name(),
        })
    }
}
