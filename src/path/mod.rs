//! Routes across the Grid, and joining them together.

mod path_segment;
pub use path_segment::PathSegment;

mod stitch;
pub use stitch::stitch;
