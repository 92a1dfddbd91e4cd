//! Planar geometry kernel.
//!
//! Two independent entry points over a shared primitives layer:
//!
//! * [`algorithms::convex_hull`] — Graham scan over a point set.
//! * [`algorithms::segment_intersections`] — left-to-right sweep line
//!   reporting every segment that intersects at least one other.
//!
//! All coordinates are `f64`. Floating-point comparisons that decide
//! geometric questions (collinearity, sweep ordering, endpoint touches) go
//! through a fixed absolute tolerance, [`EPSILON`]; values closer than the
//! tolerance are treated as equal. This is a deliberate precision boundary,
//! not something callers can tune per invocation.
#![deny(clippy::cast_lossless)]

use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;

pub use intersection::Intersects;
pub use orientation::Orientation;

/// Absolute tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1.0e-10;

/// True iff `a` and `b` differ by less than [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
  (a - b).abs() < EPSILON
}

/// Three-way comparison with an [`EPSILON`]-wide equality band.
///
/// `Ordering::Equal` means "equal within tolerance", so this is not a strict
/// total order over all of `f64`; callers that feed it into an ordered
/// container must break ties themselves (see the sweep-line status
/// structure).
pub fn approx_cmp(a: f64, b: f64) -> Ordering {
  if approx_eq(a, b) {
    Ordering::Equal
  } else {
    a.total_cmp(&b)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three distinct points were given to a hull computation.
  InsufficientInput,
  /// All input points are collinear; no two-dimensional hull exists.
  DegenerateInput,
  /// A segment with coincident (or non-finite) endpoints.
  MalformedSegment,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientInput => write!(f, "Fewer than three distinct input points"),
      Error::DegenerateInput => write!(f, "All input points are collinear"),
      Error::MalformedSegment => write!(f, "Segment endpoints coincide or are not finite"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
