//! Sweep-line intersection detection.
//!
//! A conceptual vertical line sweeps the plane from left to right, stopping
//! at segment endpoints. Segments enter the *status* structure at their left
//! endpoint and leave it at their right endpoint; while active they are kept
//! ordered by the y-coordinate at which they cross the sweep line. Only
//! segments that become adjacent in that ordering are tested against each
//! other:
//!
//! 1. **Event queue** — a binary min-heap over the segment endpoints,
//!    ordered by x ascending, then y ascending, with enter-events ahead of
//!    exit-events at equal coordinates so that endpoint touches are seen
//!    while both segments are active.
//! 2. **Status structure** — the active segments, re-sorted at every event
//!    by their y-value at the *current* sweep x. The sweep x is a field of
//!    the per-run status value and is read at comparison time; it is never
//!    cached inside an ordering key, so the ordering always reflects the
//!    current geometry.
//! 3. **Processing** — an entering segment is tested against its immediate
//!    neighbours above and below; a leaving segment's two neighbours are
//!    tested against each other, since they become adjacent once it is gone.
//! 4. **Reporting** — every segment found to intersect another is recorded
//!    once, regardless of how many intersections it participates in.
//!
//! The cost is dominated by maintaining the ordered status structure across
//! `2n` events. Neighbour checks alone do not discover intersections between
//! segments that are never adjacent at any event; callers that need every
//! intersecting *pair* on small inputs can use
//! [`naive::segment_intersection_pairs`](super::naive::segment_intersection_pairs).

use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use crate::data::{Point, Segment};
use crate::{approx_cmp, Intersects};

/// Find the segments that intersect at least one other segment.
///
/// Endpoint touches and collinear overlaps count as intersections. The
/// result has set semantics: each intersecting segment appears exactly once,
/// in input order.
///
/// # Examples
///
/// ```rust
/// # use planar2d::algorithms::segment_intersections;
/// # use planar2d::data::{Point, Segment};
/// # use planar2d::Error;
/// # fn main() -> Result<(), Error> {
/// let crossing = [
///   Segment::new(Point::new([0.0, 0.0]), Point::new([4.0, 4.0]))?,
///   Segment::new(Point::new([0.0, 4.0]), Point::new([4.0, 0.0]))?,
/// ];
/// assert_eq!(segment_intersections(&crossing).len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn segment_intersections(segments: &[Segment]) -> Vec<Segment> {
  let mut queue = EventQueue::new(segments);
  let mut status = Status::new(segments);
  let mut hits = BTreeSet::new();

  while let Some(event) = queue.pop() {
    status.set_sweep(event.point.x_coord());
    match event.kind {
      EventKind::Enter => {
        let pos = status.insert(event.segment);
        for neighbor in [status.below(pos), status.above(pos)].into_iter().flatten() {
          if segments[event.segment].intersect(&segments[neighbor]).is_some() {
            hits.insert(event.segment);
            hits.insert(neighbor);
          }
        }
      }
      EventKind::Exit => {
        if let Some(pos) = status.position(event.segment) {
          if let (Some(below), Some(above)) = (status.below(pos), status.above(pos)) {
            if segments[below].intersect(&segments[above]).is_some() {
              hits.insert(below);
              hits.insert(above);
            }
          }
          status.remove(pos);
        }
      }
    }
  }

  hits.into_iter().map(|idx| segments[idx]).collect()
}

///////////////////////////////////////////////////////////////////////////////
// Events

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
  // Enter sorts ahead of Exit so that segments touching at a shared
  // coordinate coexist in the status structure.
  Enter,
  Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Event {
  point: Point<2>,
  kind: EventKind,
  segment: usize,
}

// Segment construction rejects non-finite endpoints, so equality over the
// points an Event can carry is total.
impl Eq for Event {}

impl Event {
  fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>, EventKind, usize) {
    (
      OrderedFloat(self.point.x_coord()),
      OrderedFloat(self.point.y_coord()),
      self.kind,
      self.segment,
    )
  }
}

impl Ord for Event {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.key().cmp(&other.key())
  }
}

impl PartialOrd for Event {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

struct EventQueue {
  heap: BinaryHeap<Reverse<Event>>,
}

impl EventQueue {
  // Two events per segment: enter at the left endpoint, exit at the right.
  fn new(segments: &[Segment]) -> EventQueue {
    let mut heap = BinaryHeap::with_capacity(segments.len() * 2);
    for (idx, segment) in segments.iter().enumerate() {
      heap.push(Reverse(Event {
        point: *segment.left(),
        kind: EventKind::Enter,
        segment: idx,
      }));
      heap.push(Reverse(Event {
        point: *segment.right(),
        kind: EventKind::Exit,
        segment: idx,
      }));
    }
    EventQueue { heap }
  }

  fn pop(&mut self) -> Option<Event> {
    self.heap.pop().map(|Reverse(event)| event)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Status

/// The segments currently crossing the sweep line, ordered bottom-to-top by
/// their y-value at the current sweep x.
///
/// The comparator reads `sweep_x` at comparison time, and the whole
/// structure is re-sorted whenever the sweep advances, so the ordering is
/// re-derived from current geometry rather than cached at insertion time.
/// One `Status` value is scoped to one sweep run; nothing escapes it.
struct Status<'a> {
  active: Vec<usize>,
  segments: &'a [Segment],
  sweep_x: f64,
}

impl<'a> Status<'a> {
  fn new(segments: &'a [Segment]) -> Status<'a> {
    Status {
      active: Vec::new(),
      segments,
      sweep_x: f64::NEG_INFINITY,
    }
  }

  /// Advance the sweep line and restore the ordering invariant under the
  /// new position.
  fn set_sweep(&mut self, x: f64) {
    self.sweep_x = x;
    let segments = self.segments;
    let sweep_x = self.sweep_x;
    self
      .active
      .sort_by(|a, b| Self::cmp_at(segments, sweep_x, *a, *b));
  }

  /// Insert a segment and return its position in the active ordering.
  fn insert(&mut self, segment: usize) -> usize {
    let segments = self.segments;
    let sweep_x = self.sweep_x;
    let pos = self
      .active
      .binary_search_by(|probe| Self::cmp_at(segments, sweep_x, *probe, segment))
      .unwrap_or_else(|pos| pos);
    self.active.insert(pos, segment);
    pos
  }

  fn position(&self, segment: usize) -> Option<usize> {
    self.active.iter().position(|cand| *cand == segment)
  }

  fn below(&self, pos: usize) -> Option<usize> {
    pos.checked_sub(1).map(|idx| self.active[idx])
  }

  fn above(&self, pos: usize) -> Option<usize> {
    self.active.get(pos + 1).copied()
  }

  fn remove(&mut self, pos: usize) {
    self.active.remove(pos);
  }

  /// Three-way comparison of two active segments at sweep position `x`:
  /// y-value within epsilon counts as a tie, broken by slope (verticals
  /// last), then by index so the order is total.
  fn cmp_at(segments: &[Segment], x: f64, a: usize, b: usize) -> std::cmp::Ordering {
    if a == b {
      return std::cmp::Ordering::Equal;
    }
    let seg_a = &segments[a];
    let seg_b = &segments[b];
    approx_cmp(seg_a.y_at(x), seg_b.y_at(x))
      .then_with(|| match (seg_a.slope(), seg_b.slope()) {
        (Some(sa), Some(sb)) => approx_cmp(sa, sb),
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, None) => std::cmp::Ordering::Equal,
      })
      .then_with(|| a.cmp(&b))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
