use crate::field::SeparatingPlane;
use crate::math::{Point, Point2, Real};

/// The pair of coordinate axes kept when flattening points of a plane to 2D.
///
/// Dropping one coordinate is an affine bijection between the plane and the 2D
/// coordinate plane as long as the dropped axis is not parallel to the plane,
/// so convexity, overlap and clipping are preserved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProjectionAxes {
    /// Keeps `(x, y)` and drops `z`.
    Xy,
    /// Keeps `(x, z)` and drops `y`.
    Xz,
    /// Keeps `(y, z)` and drops `x`.
    Yz,
}

impl ProjectionAxes {
    /// A coefficient of the plane's normal smaller than this fraction of the normal's
    /// norm is treated as zero when selecting the projection axes.
    ///
    /// Projecting along an axis nearly parallel to the plane squashes the projected
    /// polygons by the ratio of that coefficient to the normal's norm (see
    /// [`ProjectionAxes::area_ratio`]) and amplifies rounding errors by its inverse.
    pub const NONZERO_RATIO: Real = 1.0e-3;

    /// Selects the projection axes of `plane`.
    ///
    /// The z coefficient of the plane is tested first, then y, then x: the first one
    /// that is nonzero (larger than [`ProjectionAxes::NONZERO_RATIO`] times the norm
    /// of the plane's normal) is dropped. The largest coefficient always passes this
    /// test, so this returns `None` only if the plane's normal is zero.
    pub fn for_plane(plane: &SeparatingPlane) -> Option<Self> {
        let normal = plane.normal();
        let threshold = Self::NONZERO_RATIO * normal.norm();

        if normal.z.abs() > threshold {
            Some(ProjectionAxes::Xy)
        } else if normal.y.abs() > threshold {
            Some(ProjectionAxes::Xz)
        } else if normal.x.abs() > threshold {
            Some(ProjectionAxes::Yz)
        } else {
            None
        }
    }

    /// The index of the coordinate dropped by this projection.
    #[inline]
    pub fn dropped_axis(self) -> usize {
        match self {
            ProjectionAxes::Xy => 2,
            ProjectionAxes::Xz => 1,
            ProjectionAxes::Yz => 0,
        }
    }

    /// The ratio between the area of a projected polygon and the area of the original
    /// polygon lying on `plane`.
    ///
    /// This is the absolute value of the cosine between the plane's normal and the
    /// dropped axis. Lengths in the plane shrink by at most this ratio when projected.
    #[inline]
    pub fn area_ratio(self, plane: &SeparatingPlane) -> Real {
        let normal = plane.normal();
        normal[self.dropped_axis()].abs() / normal.norm()
    }

    /// Flattens `pt` by dropping one coordinate.
    #[inline]
    pub fn project(self, pt: &Point<Real>) -> Point2<Real> {
        match self {
            ProjectionAxes::Xy => Point2::new(pt.x, pt.y),
            ProjectionAxes::Xz => Point2::new(pt.x, pt.z),
            ProjectionAxes::Yz => Point2::new(pt.y, pt.z),
        }
    }

    /// Lifts `pt` back onto `plane` by solving the plane equation for the dropped coordinate.
    ///
    /// The plane's coefficient along the dropped axis must be nonzero, which is
    /// guaranteed if `self` was obtained from [`ProjectionAxes::for_plane`].
    #[inline]
    pub fn unproject(self, plane: &SeparatingPlane, pt: &Point2<Real>) -> Point<Real> {
        let [a, b, c, d] = [plane.coeffs.x, plane.coeffs.y, plane.coeffs.z, plane.coeffs.w];

        match self {
            ProjectionAxes::Xy => Point::new(pt.x, pt.y, -(a * pt.x + b * pt.y + d) / c),
            ProjectionAxes::Xz => Point::new(pt.x, -(a * pt.x + c * pt.y + d) / b, pt.y),
            ProjectionAxes::Yz => Point::new(-(b * pt.x + c * pt.y + d) / a, pt.x, pt.y),
        }
    }
}
