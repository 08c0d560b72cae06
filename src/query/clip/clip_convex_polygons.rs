use core::mem;

use crate::math::{Point2, Real, Vector2, DEFAULT_EPSILON};
use crate::query::clip::{clip_halfspace_polygon, Polygon2};
use crate::utils;
use na::Unit;
use ordered_float::OrderedFloat;

/// Sorts the vertices of a convex polygon counter-clockwise.
///
/// The points are sorted by the angle of their direction from the polygon's
/// centroid. Consecutive points (including the last and first ones) closer than
/// `epsilon` from each other are merged.
///
/// The input may be given in any order, which is the case for the cross-section
/// of a tetrahedron by a plane.
pub fn ccw_convex_polygon(points: &[Point2<Real>], epsilon: Real) -> Polygon2 {
    if points.is_empty() {
        return Polygon2::new();
    }

    let center = utils::center(points);
    let mut result: Polygon2 = points.iter().copied().collect();
    result.sort_by_key(|pt| {
        let dir = pt - center;
        OrderedFloat(dir.y.atan2(dir.x))
    });
    remove_duplicate_vertices(&mut result, epsilon);
    result
}

/// Computes the intersection of two convex polygons, both oriented counter-clockwise.
///
/// This is a Sutherland-Hodgman clipping of `subject` by every edge of `clip`.
/// The result is counter-clockwise. It is empty if the polygons do not overlap, or
/// if their overlap has no area (e.g. polygons touching along an edge or at a vertex).
///
/// Points within `epsilon` of a clipping edge are considered inside, so polygons
/// sharing edges (or identical polygons) are handled without spurious splits.
///
/// # Examples
///
/// ```
/// use hydroelastic3d::math::Point2;
/// use hydroelastic3d::query::clip::clip_convex_polygons;
///
/// let square1 = [
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
/// let square2 = [
///     Point2::new(1.0, 1.0),
///     Point2::new(3.0, 1.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(1.0, 3.0),
/// ];
///
/// let intersection = clip_convex_polygons(&square1, &square2, 1.0e-9);
/// assert_eq!(intersection.len(), 4);
/// ```
pub fn clip_convex_polygons(
    subject: &[Point2<Real>],
    clip: &[Point2<Real>],
    epsilon: Real,
) -> Polygon2 {
    if subject.len() < 3 || clip.len() < 3 {
        return Polygon2::new();
    }

    let mut result: Polygon2 = subject.iter().copied().collect();
    let mut buffer = Polygon2::new();

    for (i, a) in clip.iter().enumerate() {
        if result.is_empty() {
            break;
        }

        let b = clip[(i + 1) % clip.len()];
        let edge = b - a;

        // The interior of a counter-clockwise polygon is on the left of its edges.
        let Some(outward) = Unit::try_new(Vector2::new(edge.y, -edge.x), DEFAULT_EPSILON) else {
            continue;
        };

        clip_halfspace_polygon(a, &outward, &result, epsilon, &mut buffer);
        mem::swap(&mut result, &mut buffer);
    }

    remove_duplicate_vertices(&mut result, epsilon);

    if result.len() < 3 || polygon_area(&result) <= epsilon * polygon_perimeter(&result) {
        log::trace!("The clipped polygon has no area: {:?}", result);
        result.clear();
    }

    result
}

/// The (positive) area of a counter-clockwise polygon.
pub fn polygon_area(polygon: &[Point2<Real>]) -> Real {
    let n = polygon.len();
    let twice_area: Real = (0..n)
        .map(|i| {
            let a = polygon[i];
            let b = polygon[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();

    twice_area * 0.5
}

fn polygon_perimeter(polygon: &[Point2<Real>]) -> Real {
    let n = polygon.len();
    (0..n)
        .map(|i| na::distance(&polygon[i], &polygon[(i + 1) % n]))
        .sum()
}

fn remove_duplicate_vertices(polygon: &mut Polygon2, epsilon: Real) {
    polygon.dedup_by(|a, b| relative_eq!(*a, *b, epsilon = epsilon));

    while polygon.len() > 1 && relative_eq!(polygon[0], polygon[polygon.len() - 1], epsilon = epsilon)
    {
        let _ = polygon.pop();
    }
}
