use std::ops::Index;

use crate::data::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize = 2>(pub [f64; N]);

impl<const N: usize> Vector<N> {
  pub fn zero() -> Vector<N> {
    Vector([0.0; N])
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.0.iter().map(|elt| elt * elt).sum()
  }
}

impl Vector<2> {
  /// 2-D cross product. Positive iff `other` is counter-clockwise of `self`.
  pub fn cross(&self, other: &Vector<2>) -> f64 {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }
}

impl<const N: usize> Index<usize> for Vector<N> {
  type Output = f64;
  fn index(&self, index: usize) -> &f64 {
    self.0.index(index)
  }
}

impl<const N: usize> From<Point<N>> for Vector<N> {
  fn from(point: Point<N>) -> Vector<N> {
    Vector(point.array)
  }
}
