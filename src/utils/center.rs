use crate::math::Real;

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Works for points of any dimension, which lets
/// the contact pipeline average both 3D cross-sections and their 2D projections.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Examples
///
/// ```
/// use hydroelastic3d::math::Point;
/// use hydroelastic3d::utils::center;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-12);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-12);
/// assert!(c.z.abs() < 1e-12);
/// ```
#[inline]
pub fn center<const D: usize>(pts: &[na::Point<Real, D>]) -> na::Point<Real, D> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom = 1.0 / pts.len() as Real;
    pts.iter()
        .fold(na::Point::origin(), |acc, pt| acc + pt.coords * denom)
}
