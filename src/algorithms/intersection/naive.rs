use crate::data::Segment;
use crate::Intersects;

/// Find all intersecting segment pairs by brute force.
///
/// Unlike the sweep, this reports every intersecting *pair*, which makes it
/// the oracle the sweep's output is checked against in the tests.
///
/// # Time complexity
/// $O(n^2)$
pub fn segment_intersection_pairs(
  segments: &[Segment],
) -> impl Iterator<Item = (&Segment, &Segment)> {
  pairs(segments).filter_map(|(a, b)| {
    let _isect = a.intersect(b)?;
    Some((a, b))
  })
}

fn pairs<E>(slice: &[E]) -> impl Iterator<Item = (&E, &E)> {
  let n = slice.len();
  (0..n).flat_map(move |a| (0..a).map(move |b| (&slice[a], &slice[b])))
}
