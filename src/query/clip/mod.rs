//! Projection and clipping of the planar cross-sections of two tetrahedra.

pub use self::clip_convex_polygons::{ccw_convex_polygon, clip_convex_polygons, polygon_area};
pub use self::clip_halfspace_polygon::clip_halfspace_polygon;
pub use self::projection::ProjectionAxes;

use crate::math::{Point2, Real};
use smallvec::SmallVec;

/// A small 2D polygon.
///
/// Clipping a quadrilateral by another one gives at most 8 vertices.
pub type Polygon2 = SmallVec<[Point2<Real>; 8]>;

mod clip_convex_polygons;
mod clip_halfspace_polygon;
mod projection;
