use crate::approx_eq;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Classifies the sign of [`Orientation::signed_area_2x`] with the crate
  /// tolerance: a magnitude below [`EPSILON`](crate::EPSILON) counts as
  /// `CoLinear`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use planar2d::Orientation;
  /// let p1 = [0.0, 0.0];
  /// let p2 = [0.0, 1.0]; // One unit above p1.
  /// assert!(Orientation::new(&p1, &p2, &[0.0, 2.0]).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &[-1.0, 2.0]).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &[1.0, 2.0]).is_cw());
  /// ```
  pub fn new(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> Orientation {
    let area = Orientation::signed_area_2x(p1, p2, p3);
    if approx_eq(area, 0.0) {
      CoLinear
    } else if area > 0.0 {
      CounterClockWise
    } else {
      ClockWise
    }
  }

  /// Twice the signed area of the triangle `p1`, `p2`, `p3`: the cross
  /// product `(p2 - p1) × (p3 - p1)`.
  ///
  /// Positive iff `p3` lies to the left of the directed line `p1 -> p2`.
  pub fn signed_area_2x(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> f64 {
    (p2[0] - p1[0]) * (p3[1] - p1[1]) - (p2[1] - p1[1]) * (p3[0] - p1[0])
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}
