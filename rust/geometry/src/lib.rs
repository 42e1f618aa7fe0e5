//! Ashiba Geometry Processing
//!
//! Footprint polygon analysis for scaffold planning: corner and face
//! classification, clearance offsetting, and scaffold-line generation
//! using nalgebra for the vector math.

pub mod polygon;
pub mod offset;
pub mod line;
pub mod error;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};

pub use error::{Error, Result};
pub use polygon::{BuildingPolygon, BuildingVertex, CornerKind, FaceDirection};
pub use offset::line_intersection;
pub use line::{scaffold_line, split_at_inside_corner, resolve_clearances, format_drawing_span, parse_drawing_span, marker_positions};
pub use line::{EdgeClearance, FaceClearances, ScaffoldBounds, ScaffoldEdge, ScaffoldLineResult};
