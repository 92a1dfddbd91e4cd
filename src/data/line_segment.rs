use std::cmp::Ordering;

use super::Point;

use crate::Intersects;
use crate::{approx_eq, Error, EPSILON};

///////////////////////////////////////////////////////////////////////////////
// Segment

/// A line segment with endpoints ordered so that `left.x <= right.x`
/// (ties broken by y).
///
/// The ordering is enforced at construction and the fields are private, so
/// every `Segment` in existence satisfies the invariant. Construction fails
/// with [`Error::MalformedSegment`] if the endpoints coincide within
/// [`EPSILON`](crate::EPSILON) or are not finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
  left: Point<2>,
  right: Point<2>,
}

impl Segment {
  pub fn new(a: Point<2>, b: Point<2>) -> Result<Segment, Error> {
    if !a.is_finite() || !b.is_finite() {
      return Err(Error::MalformedSegment);
    }
    if approx_eq(a.x_coord(), b.x_coord()) && approx_eq(a.y_coord(), b.y_coord()) {
      return Err(Error::MalformedSegment);
    }
    match a.cmp_lex(&b) {
      Ordering::Greater => Ok(Segment { left: b, right: a }),
      _ => Ok(Segment { left: a, right: b }),
    }
  }

  /// The endpoint where the sweep line enters the segment.
  pub fn left(&self) -> &Point<2> {
    &self.left
  }

  /// The endpoint where the sweep line leaves the segment.
  pub fn right(&self) -> &Point<2> {
    &self.right
  }

  /// The y-coordinate of the segment evaluated at sweep position `x`.
  ///
  /// Vertical segments report their lower endpoint. The result is only
  /// meaningful for `x` within the segment's span; the sweep never asks
  /// outside it.
  pub fn y_at(&self, x: f64) -> f64 {
    let x1 = self.left.x_coord();
    let y1 = self.left.y_coord();
    let x2 = self.right.x_coord();
    let y2 = self.right.y_coord();

    if approx_eq(x1, x2) {
      return y1.min(y2);
    }
    y1 + (y2 - y1) / (x2 - x1) * (x - x1)
  }

  /// `None` for vertical segments.
  pub fn slope(&self) -> Option<f64> {
    let dx = self.right.x_coord() - self.left.x_coord();
    if approx_eq(dx, 0.0) {
      return None;
    }
    Some((self.right.y_coord() - self.left.y_coord()) / dx)
  }

  /// True iff `pt` lies within the segment's bounding box, with an
  /// [`EPSILON`](crate::EPSILON)-wide slack on every edge.
  ///
  /// Only meaningful once `pt` is known to be collinear with the segment:
  /// it confirms that the point lies between the endpoints rather than
  /// merely on the infinite line through them.
  pub fn bounding_box_contains(&self, pt: &Point<2>) -> bool {
    let (x1, y1) = (self.left.x_coord(), self.left.y_coord());
    let (x2, y2) = (self.right.x_coord(), self.right.y_coord());
    let x_lo = x1.min(x2) - EPSILON;
    let x_hi = x1.max(x2) + EPSILON;
    let y_lo = y1.min(y2) - EPSILON;
    let y_hi = y1.max(y2) + EPSILON;
    x_lo <= pt.x_coord() && pt.x_coord() <= x_hi && y_lo <= pt.y_coord() && pt.y_coord() <= y_hi
  }
}

///////////////////////////////////////////////////////////////////////////////
// SegmentIntersection

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum SegmentIntersection {
  /// The segments properly cross: each pair of endpoints straddles the
  /// other segment's line.
  Proper,
  /// An endpoint of one segment lies on the other segment (this includes
  /// shared endpoints and collinear overlap).
  Boundary,
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl Intersects for &Segment {
  type Result = SegmentIntersection;

  /// The four-orientation segment intersection test.
  ///
  /// The segments properly intersect iff the endpoints of each straddle the
  /// line through the other. In the degenerate case, each of the four
  /// endpoints is checked independently: a (near-)collinear endpoint that
  /// falls inside the other segment's bounding box is an intersection.
  fn intersect(self, other: &Segment) -> Option<SegmentIntersection> {
    let p1 = self.left();
    let p2 = self.right();
    let p3 = other.left();
    let p4 = other.right();

    let d1 = p3.orientation(p4, p1);
    let d2 = p3.orientation(p4, p2);
    let d3 = p1.orientation(p2, p3);
    let d4 = p1.orientation(p2, p4);

    if !d1.is_colinear() && d1 == d2.reverse() && !d3.is_colinear() && d3 == d4.reverse() {
      Some(SegmentIntersection::Proper)
    } else if d1.is_colinear() && other.bounding_box_contains(p1) {
      Some(SegmentIntersection::Boundary)
    } else if d2.is_colinear() && other.bounding_box_contains(p2) {
      Some(SegmentIntersection::Boundary)
    } else if d3.is_colinear() && self.bounding_box_contains(p3) {
      Some(SegmentIntersection::Boundary)
    } else if d4.is_colinear() && self.bounding_box_contains(p4) {
      Some(SegmentIntersection::Boundary)
    } else {
      None
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
