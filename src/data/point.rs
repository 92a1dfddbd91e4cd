use array_init::array_init;
use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Index;

use super::Vector;
use crate::Orientation;

/// A fixed-dimension point with `f64` coordinates.
///
/// Equality is exact per-field; callers that need tolerance apply
/// [`approx_eq`](crate::approx_eq) explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Point<const N: usize = 2> {
  pub array: [f64; N],
}

// Random sampling, used by the benches.
impl<const N: usize> Distribution<Point<N>> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<const N: usize> Point<N> {
  pub const fn new(array: [f64; N]) -> Point<N> {
    Point { array }
  }

  pub fn zero() -> Point<N> {
    Point { array: [0.0; N] }
  }

  pub fn as_vec(&self) -> Vector<N> {
    Vector(self.array)
  }

  /// Lexicographic comparison by coordinate, total over all finite points.
  pub fn cmp_lex(&self, other: &Point<N>) -> Ordering {
    let lhs = self.array.map(OrderedFloat);
    let rhs = other.array.map(OrderedFloat);
    lhs.cmp(&rhs)
  }

  /// Compare the distances from `self` to `p` and to `q`.
  pub fn cmp_distance_to(&self, p: &Point<N>, q: &Point<N>) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .total_cmp(&self.squared_euclidean_distance(q))
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<N>) -> f64 {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .map(|(a, b)| (a - b) * (a - b))
      .sum()
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }
}

// Methods on two-dimensional points.
impl Point<2> {
  /// Turn direction of the triple `self -> q -> r`.
  pub fn orientation(&self, q: &Point<2>, r: &Point<2>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }
}

impl<const N: usize> Index<usize> for Point<N> {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl From<(f64, f64)> for Point<2> {
  fn from(point: (f64, f64)) -> Point<2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<const N: usize> From<Vector<N>> for Point<N> {
  fn from(vector: Vector<N>) -> Point<N> {
    Point { array: vector.0 }
  }
}

mod add;
mod sub;
