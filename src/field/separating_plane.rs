use crate::field::AffineField;
use crate::math::{Point, Real, Vector, Vector4, DEFAULT_EPSILON};
use na::Unit;

/// The plane on which two affine potential fields are equal.
///
/// Its coefficients are the difference `field1 - field2`: a point `p` is on the
/// plane iff `field1(p) == field2(p)`. The coefficients are *not* normalized, so
/// [`SeparatingPlane::signed_value`] is the potential difference at a point, not a
/// distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeparatingPlane {
    /// The coefficients `(a, b, c, d)` of the plane equation `a·x + b·y + c·z + d = 0`.
    pub coeffs: Vector4<Real>,
}

impl SeparatingPlane {
    /// The plane where `field1` and `field2` take the same value.
    #[inline]
    pub fn between(field1: &AffineField, field2: &AffineField) -> Self {
        Self {
            coeffs: field1.coeffs - field2.coeffs,
        }
    }

    /// The (non-normalized) normal `(a, b, c)` of this plane.
    ///
    /// It points toward the side where the first field is larger than the second.
    #[inline]
    pub fn normal(&self) -> Vector<Real> {
        self.coeffs.xyz()
    }

    /// The unit normal of this plane, or `None` if the plane is degenerate.
    #[inline]
    pub fn unit_normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.normal(), DEFAULT_EPSILON)
    }

    /// Is the squared norm of this plane's normal smaller than `epsilon`?
    ///
    /// Fields with (nearly) identical gradients only differ by a constant shift: they
    /// are equal either nowhere or everywhere, so they define no contact surface.
    #[inline]
    pub fn is_degenerate(&self, epsilon: Real) -> bool {
        self.normal().norm_squared() < epsilon
    }

    /// Evaluates the plane's linear form `a·x + b·y + c·z + d` at `pt`.
    #[inline]
    pub fn signed_value(&self, pt: &Point<Real>) -> Real {
        self.normal().dot(&pt.coords) + self.coeffs.w
    }
}
