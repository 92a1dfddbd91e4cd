pub mod convex_hull;
pub mod intersection;

#[doc(inline)]
pub use convex_hull::graham_scan::convex_hull;

#[doc(inline)]
pub use intersection::sweep_line::segment_intersections;
