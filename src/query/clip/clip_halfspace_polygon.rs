use crate::math::{Point2, Real, Vector2};
use crate::query::clip::Polygon2;

/// Cuts a 2D polygon with the given half-plane.
///
/// Given the half-plane `center` and unit outward `normal`, this computes the
/// intersection between the half-plane and the polygon, in the same winding order.
/// A point `pt` is considered inside of the half-plane if
/// `normal.dot(&(pt - center)) <= epsilon`, so points lying on the boundary line
/// (up to `epsilon`) are kept unchanged.
pub fn clip_halfspace_polygon(
    center: &Point2<Real>,
    normal: &Vector2<Real>,
    polygon: &[Point2<Real>],
    epsilon: Real,
    result: &mut Polygon2,
) {
    result.clear();

    let Some(last_pt) = polygon.last() else {
        return;
    };

    let dist = |pt: &Point2<Real>| (pt - center).dot(normal);
    let mut prev_pt = last_pt;
    let mut prev_dist = dist(prev_pt);

    for pt in polygon {
        let curr_dist = dist(pt);
        let keep = curr_dist <= epsilon;

        if keep != (prev_dist <= epsilon) {
            // We crossed the boundary line, so we need
            // to cut the edge.
            let toi = (prev_dist / (prev_dist - curr_dist)).clamp(0.0, 1.0);
            result.push(prev_pt + (pt - prev_pt) * toi);
        }

        if keep {
            result.push(*pt);
        }

        prev_pt = pt;
        prev_dist = curr_dist;
    }
}
