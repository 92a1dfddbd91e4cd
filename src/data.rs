mod line_segment;
pub(crate) mod point;
mod vector;

pub use line_segment::{Segment, SegmentIntersection};
pub use point::Point;
pub use vector::Vector;
