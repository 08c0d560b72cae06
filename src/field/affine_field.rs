use crate::field::{LinearSolver, SingularFieldError};
use crate::math::{Point, Real, Vector, Vector4};
use crate::shape::Tetrahedron;

/// An affine scalar field `φ(p) = a·x + b·y + c·z + d`.
///
/// This is the potential of a soft body inside one of its tetrahedra: the unique
/// affine function interpolating the four vertex potentials.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AffineField {
    /// The coefficients `(a, b, c, d)` of the field.
    pub coeffs: Vector4<Real>,
}

impl AffineField {
    /// Creates an affine field from its coefficients `(a, b, c, d)`.
    #[inline]
    pub fn new(coeffs: Vector4<Real>) -> Self {
        Self { coeffs }
    }

    /// Fits the affine field taking the value `potentials[k]` at the k-th vertex of `tetrahedron`.
    ///
    /// This solves the 4×4 system whose rows are `[x, y, z, 1]` for each vertex,
    /// with coordinates taken relative to the center of the tetrahedron and divided
    /// by its radius (see [`Tetrahedron::normalized_homogeneous_matrix`]), so that
    /// the result does not depend on where the tetrahedron is.
    ///
    /// Fails if the tetrahedron is degenerate: a flat tetrahedron admits either no
    /// interpolating field or infinitely many.
    pub fn fit<S: LinearSolver + ?Sized>(
        solver: &S,
        tetrahedron: &Tetrahedron,
        potentials: &[Real; 4],
    ) -> Result<Self, SingularFieldError> {
        let rhs = Vector4::from_column_slice(potentials);
        let (matrix, center, radius) = tetrahedron.normalized_homogeneous_matrix();
        let local = solver
            .solve(&matrix, &rhs)
            .ok_or(SingularFieldError::AffineField)?;

        // Back to world coordinates: φ(p) = g · (p - center) / radius + w.
        let gradient = local.xyz() / radius;
        let offset = local.w - gradient.dot(&center.coords);
        Ok(Self::new(Vector4::new(
            gradient.x, gradient.y, gradient.z, offset,
        )))
    }

    /// The gradient `(a, b, c)` of this field.
    #[inline]
    pub fn gradient(&self) -> Vector<Real> {
        self.coeffs.xyz()
    }

    /// The value `d` of this field at the origin.
    #[inline]
    pub fn offset(&self) -> Real {
        self.coeffs.w
    }

    /// Evaluates this field at the given point.
    #[inline]
    pub fn evaluate(&self, pt: &Point<Real>) -> Real {
        self.gradient().dot(&pt.coords) + self.offset()
    }
}
