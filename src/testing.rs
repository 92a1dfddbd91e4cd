// Proptest strategies for points and segments, shared by the unit tests.
use crate::data::{Point, Segment};

use proptest::prelude::*;

pub fn any_coord() -> impl Strategy<Value = f64> {
  -1.0e3..1.0e3
}

pub fn any_point() -> impl Strategy<Value = Point<2>> {
  [any_coord(), any_coord()].prop_map(Point::new)
}

pub fn any_segment() -> impl Strategy<Value = Segment> {
  (any_point(), any_point()).prop_filter_map("degenerate segment", |(a, b)| {
    Segment::new(a, b).ok()
  })
}

/// Segments with small integer-valued coordinates. Collinear configurations,
/// shared endpoints and crossings all show up at a useful rate.
pub fn lattice_segment() -> impl Strategy<Value = Segment> {
  let coord = -5..=5i8;
  (coord.clone(), coord.clone(), coord.clone(), coord).prop_filter_map(
    "degenerate segment",
    |(x1, y1, x2, y2)| {
      Segment::new(
        Point::new([f64::from(x1), f64::from(y1)]),
        Point::new([f64::from(x2), f64::from(y2)]),
      )
      .ok()
    },
  )
}
