//! Tolerance defaults for screen geometry.
//!
//! Policy
//! - Fixed constants; recognizers rely on them being identical across passes so
//!   a probe and its later application agree.

/// Max distance (pixels) at which a point still counts as lying on a segment.
///
/// Intersection points are rounded to whole pixels before the membership test,
/// so this must stay above `sqrt(2)/2`.
pub const ON_SEGMENT_TOL_PX: f64 = 2.0;
