use crate::math::{Point, Real, Vector};
use crate::utils;
use ordered_float::OrderedFloat;

/// Triangulates a planar convex polygon given by its vertices in arbitrary order.
///
/// The vertices are sorted by angle around their centroid, starting from the first
/// input point, and connected as a fan pivoting on this first point. Each returned
/// triangle holds indices into `points` and the triangles partition the polygon.
///
/// Returns an empty list if fewer than three points are given or if all the points
/// are collinear.
///
/// # Examples
///
/// ```
/// use hydroelastic3d::math::Point;
/// use hydroelastic3d::transformation::triangulate_polygon;
///
/// let square = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
/// ];
/// assert_eq!(triangulate_polygon(&square).len(), 2);
/// ```
pub fn triangulate_polygon(points: &[Point<Real>]) -> Vec<[u32; 3]> {
    if points.len() < 3 {
        log::debug!(
            "Cannot triangulate a polygon with {} vertices.",
            points.len()
        );
        return Vec::new();
    }

    let center = utils::center(points);
    let dirs: Vec<Vector<Real>> = points.iter().map(|pt| pt - center).collect();
    let d0 = dirs[0];

    let Some(normal) = dirs[1..].iter().find_map(|di| {
        let n = d0.cross(di);
        (n.norm() > 1.0e-6 * d0.norm() * di.norm()).then_some(n)
    }) else {
        log::debug!("Cannot triangulate a polygon with collinear vertices.");
        return Vec::new();
    };

    let mut angles: Vec<(u32, Real)> = dirs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, di)| {
            let cross = di.cross(&d0);
            let angle = cross.norm().atan2(d0.dot(di));
            let angle = if normal.dot(&cross) < 0.0 {
                core::f64::consts::TAU - angle
            } else {
                angle
            };
            (i as u32, angle)
        })
        .collect();
    angles.sort_by_key(|(_, angle)| OrderedFloat(*angle));

    angles
        .windows(2)
        .map(|w| [0, w[0].0, w[1].0])
        .collect()
}
