//! Mesh generation and conversion.

pub use self::fan_triangulation::triangulate_polygon;

mod fan_triangulation;
