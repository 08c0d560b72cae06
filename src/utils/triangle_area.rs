use crate::math::{Point, Real};

/// The area of the triangle `(a, b, c)`.
#[inline]
pub fn triangle_area(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Real {
    (b - a).cross(&(c - a)).norm() * 0.5
}
