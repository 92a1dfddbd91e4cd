mod sweep_line {
  use planar2d::algorithms::intersection::naive::segment_intersection_pairs;
  use planar2d::algorithms::segment_intersections;
  use planar2d::data::{Point, Segment};
  use planar2d::Error;

  fn seg(a: (f64, f64), b: (f64, f64)) -> Result<Segment, Error> {
    Segment::new(Point::new([a.0, a.1]), Point::new([b.0, b.1]))
  }

  #[test]
  fn crossing_diagonals() -> Result<(), Error> {
    let segments = [seg((0.0, 0.0), (4.0, 4.0))?, seg((0.0, 4.0), (4.0, 0.0))?];
    let hits = segment_intersections(&segments);
    assert_eq!(hits, segments.to_vec());
    Ok(())
  }

  #[test]
  fn disjoint_collinear() -> Result<(), Error> {
    let segments = [seg((0.0, 0.0), (1.0, 0.0))?, seg((2.0, 0.0), (3.0, 0.0))?];
    assert!(segment_intersections(&segments).is_empty());
    Ok(())
  }

  #[test]
  fn malformed_segment_is_rejected_at_construction() {
    assert_eq!(seg((1.0, 1.0), (1.0, 1.0)), Err(Error::MalformedSegment));
  }

  #[test]
  fn mixed_batch() -> Result<(), Error> {
    let segments = [
      seg((0.0, 0.0), (4.0, 4.0))?,  // crosses 1
      seg((0.0, 4.0), (4.0, 0.0))?,  // crosses 0
      seg((5.0, 5.0), (6.0, 6.0))?,  // isolated
      seg((6.0, 0.0), (8.0, 0.0))?,  // touches 4 at (8, 0)
      seg((8.0, 0.0), (9.0, 2.0))?,  // touches 3 at (8, 0)
    ];
    let hits = segment_intersections(&segments);
    assert_eq!(
      hits,
      vec![segments[0], segments[1], segments[3], segments[4]]
    );
    Ok(())
  }

  // The sweep's reports must be confirmed by the quadratic oracle.
  #[test]
  fn sweep_is_sound_against_naive() -> Result<(), Error> {
    let segments = [
      seg((0.0, 0.0), (3.0, 3.0))?,
      seg((0.0, 3.0), (3.0, 0.0))?,
      seg((1.0, 0.0), (2.0, 3.0))?,
      seg((4.0, 4.0), (5.0, 5.0))?,
      seg((-1.0, -1.0), (-0.5, 2.0))?,
    ];
    let oracle: Vec<&Segment> = segment_intersection_pairs(&segments)
      .flat_map(|(a, b)| [a, b])
      .collect();
    for hit in segment_intersections(&segments) {
      assert!(oracle.iter().any(|cand| **cand == hit));
    }
    Ok(())
  }
}
