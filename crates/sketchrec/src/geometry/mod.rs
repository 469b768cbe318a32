//! Screen geometry: integer points, bounding boxes, angles, and segment tests.
//!
//! Purpose
//! - Pure value types and pure functions shared by every recognition stage.
//! - Degenerate inputs (zero-length segments, vertical slopes, zero-area boxes)
//!   are guarded and map to `0`/`None`, never to NaN or a panic.
//!
//! Conventions
//! - Screen coordinates are integer pixels; derived quantities are `f64`.
//! - Headings are `atan2(dy, dx)`, so `0` points right and angles grow toward +y.
//! - Code cross-refs: `Point`, `Bounds`, `Angle`, `segment::{segment_intersection, line_intersection}`

mod bounds;
pub(crate) mod cfg;
pub mod segment;
mod types;

pub use bounds::Bounds;
pub use cfg::ON_SEGMENT_TOL_PX;
pub use segment::{distance_to_segment, is_on_segment, line_intersection, segment_intersection};
pub use types::{Angle, Point, TimedPoint};
