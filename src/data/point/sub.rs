use array_init::array_init;
use std::ops::Index;
use std::ops::Sub;

use crate::data::point::Point;
use crate::data::Vector;

// &point - &point = vector
impl<'a, 'b, const N: usize> Sub<&'a Point<N>> for &'b Point<N> {
  type Output = Vector<N>;

  fn sub(self: &'b Point<N>, other: &'a Point<N>) -> Self::Output {
    Vector(array_init(|i| self.array.index(i) - other.array.index(i)))
  }
}

// point - point = vector
impl<const N: usize> Sub<Point<N>> for Point<N> {
  type Output = Vector<N>;

  fn sub(self: Point<N>, other: Point<N>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}

// &point - &vector = point
impl<'a, 'b, const N: usize> Sub<&'a Vector<N>> for &'b Point<N> {
  type Output = Point<N>;

  fn sub(self: &'b Point<N>, other: &'a Vector<N>) -> Self::Output {
    Point {
      array: array_init(|i| self.array.index(i) - other.0.index(i)),
    }
  }
}

// point - vector = point
impl<const N: usize> Sub<Vector<N>> for Point<N> {
  type Output = Point<N>;

  fn sub(self: Point<N>, other: Vector<N>) -> Self::Output {
    &self - &other
  }
}
