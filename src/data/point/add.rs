use array_init::array_init;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Index;

use crate::data::point::Point;
use crate::data::Vector;

// &point + &vector = point
impl<'a, 'b, const N: usize> Add<&'a Vector<N>> for &'b Point<N> {
  type Output = Point<N>;

  fn add(self: &'b Point<N>, other: &'a Vector<N>) -> Self::Output {
    Point {
      array: array_init(|i| self.array.index(i) + other.0.index(i)),
    }
  }
}

// point + vector = point
impl<const N: usize> Add<Vector<N>> for Point<N> {
  type Output = Point<N>;

  fn add(self: Point<N>, other: Vector<N>) -> Self::Output {
    &self + &other
  }
}

// point += &vector
impl<const N: usize> AddAssign<&Vector<N>> for Point<N> {
  fn add_assign(&mut self, other: &Vector<N>) {
    for i in 0..N {
      self.array[i] += other.0.index(i)
    }
  }
}

// point += vector
impl<const N: usize> AddAssign<Vector<N>> for Point<N> {
  fn add_assign(&mut self, other: Vector<N>) {
    *self += &other
  }
}
