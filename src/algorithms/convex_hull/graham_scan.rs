use ordered_float::OrderedFloat;
use std::cmp::Ordering;

use crate::data::Point;
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Graham_scan

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon
/// which contains all the given points. The result is in counter-clockwise
/// order, starting from the point with the minimum y-coordinate (ties broken
/// by minimum x).
///
/// # Errors
/// * [`Error::InsufficientInput`] if the input contains fewer than three
///   distinct points.
/// * [`Error::DegenerateInput`] if all input points are collinear.
///
/// # Properties
/// * Every consecutive triple of hull vertices is a strict left turn.
/// * No points from the input set are outside the returned polygon.
/// * All hull vertices are from the input set.
///
/// # Examples
///
/// ```rust
/// # use planar2d::algorithms::convex_hull;
/// # use planar2d::data::Point;
/// # use planar2d::Error;
/// let empty_set: Vec<Point> = vec![];
/// assert_eq!(convex_hull(empty_set).err(), Some(Error::InsufficientInput));
/// ```
///
/// ```rust
/// # use planar2d::algorithms::convex_hull;
/// # use planar2d::data::Point;
/// # use planar2d::Error;
/// let line = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([2.0, 0.0]),
/// ];
/// assert_eq!(convex_hull(line).err(), Some(Error::DegenerateInput));
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(mut pts: Vec<Point<2>>) -> Result<Vec<Point<2>>, Error> {
  if pts.len() < 3 {
    return Err(Error::InsufficientInput);
  }
  let pivot = smallest_point(&pts)?;

  // Polar-angle sort around the pivot via the cross product, never atan2.
  // All points lie in the half-plane above the pivot, so the orientation
  // sign is a consistent angle comparison; collinear ties put the point
  // nearer the pivot first.
  pts.sort_unstable_by(|a, b| match pivot.orientation(a, b) {
    Orientation::CounterClockWise => Ordering::Less,
    Orientation::ClockWise => Ordering::Greater,
    Orientation::CoLinear => pivot.cmp_distance_to(a, b),
  });
  pts.dedup();
  if pts.len() < 3 {
    return Err(Error::InsufficientInput);
  }

  // Monotonic stack: the stack is a convex CCW chain after every step.
  let mut hull: Vec<Point<2>> = Vec::with_capacity(pts.len());
  for pt in pts {
    while hull.len() >= 2 {
      let top = &hull[hull.len() - 1];
      let below = &hull[hull.len() - 2];
      // Pop anything that is not a strict left turn (collinear or clockwise).
      if below.orientation(top, &pt).is_ccw() {
        break;
      }
      hull.pop();
    }
    hull.push(pt);
  }

  if hull.len() < 3 {
    return Err(Error::DegenerateInput);
  }
  Ok(hull)
}

// Pivot: minimum y, ties broken by minimum x. Provably on the hull.
// O(n)
fn smallest_point(pts: &[Point<2>]) -> Result<Point<2>, Error> {
  pts
    .iter()
    .min_by_key(|a| (OrderedFloat(a.y_coord()), OrderedFloat(a.x_coord())))
    .copied()
    .ok_or(Error::InsufficientInput)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::assert_ok;
  use proptest::collection::vec;
  use proptest::prelude::*;

  fn pt(x: f64, y: f64) -> Point<2> {
    Point::new([x, y])
  }

  fn is_strictly_convex_ccw(hull: &[Point<2>]) -> bool {
    let n = hull.len();
    (0..n).all(|i| hull[i].orientation(&hull[(i + 1) % n], &hull[(i + 2) % n]).is_ccw())
  }

  fn contains(hull: &[Point<2>], p: &Point<2>) -> bool {
    // On a CCW hull, interior and boundary points are never to the right of
    // any directed edge. Tolerance is looser than EPSILON because the areas
    // here are recomputed from scratch and pick up fresh rounding error.
    let n = hull.len();
    (0..n).all(|i| {
      Orientation::signed_area_2x(&hull[i].array, &hull[(i + 1) % n].array, &p.array) > -1.0e-6
    })
  }

  #[test]
  fn square_with_interior_point() {
    let points = vec![
      pt(0.0, 0.0),
      pt(4.0, 0.0),
      pt(4.0, 4.0),
      pt(0.0, 4.0),
      pt(2.0, 2.0),
    ];
    let hull = convex_hull(points).unwrap();
    assert_eq!(
      hull,
      vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)]
    );
  }

  #[test]
  fn starts_at_lowest_point() {
    let points = vec![pt(3.0, 5.0), pt(-1.0, 2.0), pt(2.0, -1.0), pt(6.0, 1.0)];
    let hull = convex_hull(points).unwrap();
    assert_eq!(hull[0], pt(2.0, -1.0));
  }

  #[test]
  fn collinear_input_is_degenerate() {
    let points = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)];
    assert_eq!(convex_hull(points).err(), Some(Error::DegenerateInput));
  }

  #[test]
  fn too_few_points() {
    assert_eq!(
      convex_hull(vec![pt(0.0, 0.0), pt(1.0, 1.0)]).err(),
      Some(Error::InsufficientInput)
    );
    let dups = vec![pt(0.0, 0.0); 5];
    assert_eq!(convex_hull(dups).err(), Some(Error::InsufficientInput));
  }

  #[test]
  fn collinear_points_on_hull_edge() {
    let points = vec![
      pt(0.0, 0.0),
      pt(1.0, 0.0),
      pt(2.0, 0.0),
      pt(3.0, 0.0),
      pt(4.0, 0.0),
      pt(1.0, 1.0),
    ];
    let hull = convex_hull(points).unwrap();
    assert!(is_strictly_convex_ccw(&hull));
    assert_eq!(hull, vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(1.0, 1.0)]);
  }

  #[test]
  fn collinear_points_on_pivot_ray() {
    let points = vec![
      pt(0.0, 0.0),
      pt(1.0, 0.0),
      pt(0.0, 9.0),
      pt(0.0, 8.0),
      pt(0.0, 7.0),
      pt(0.0, 6.0),
    ];
    let hull = convex_hull(points).unwrap();
    assert!(is_strictly_convex_ccw(&hull));
    assert_eq!(hull, vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 9.0)]);
  }

  #[test]
  fn near_collinear_midpoints_are_dropped() {
    let points = vec![
      pt(0.0, 0.0),
      pt(100.0, 0.0),
      pt(50.0, 1.0),
      pt(40.0, 1.0),
      pt(0.0, 100.0),
    ];
    let hull = assert_ok!(convex_hull(points));
    assert!(is_strictly_convex_ccw(&hull));
  }

  proptest! {
    #[test]
    fn hull_properties(pts in vec(any_point(), 0..100)) {
      if let Ok(hull) = convex_hull(pts.clone()) {
        // Prop #1: Results are strictly convex and counter-clockwise.
        prop_assert!(is_strictly_convex_ccw(&hull));
        // Prop #2: No points from the input set are outside the hull.
        for p in pts.iter() {
          prop_assert!(contains(&hull, p));
        }
        // Prop #3: All vertices are from the input set.
        for v in hull.iter() {
          prop_assert!(pts.contains(v));
        }
      }
    }

    #[test]
    fn removing_a_vertex_never_grows_the_hull(pts in vec(any_point(), 4..50)) {
      if let Ok(hull) = convex_hull(pts.clone()) {
        let victim = hull[0];
        let rest: Vec<_> = pts.iter().copied().filter(|p| *p != victim).collect();
        if let Ok(smaller) = convex_hull(rest) {
          prop_assert!(area_2x(&smaller) <= area_2x(&hull) + 1e-6);
        }
      }
    }
  }

  // Shoelace formula, doubled.
  fn area_2x(hull: &[Point<2>]) -> f64 {
    let n = hull.len();
    (0..n)
      .map(|i| {
        let p = &hull[i];
        let q = &hull[(i + 1) % n];
        p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord()
      })
      .sum()
  }
}
