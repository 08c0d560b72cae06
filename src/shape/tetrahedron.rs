//! Definition of the tetrahedron shape.

use crate::field::LinearSolver;
use crate::math::{Isometry, Matrix, Matrix4, Point, Real, Vector4};
use crate::utils;

/// A tetrahedron with 4 vertices.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tetrahedron {
    /// The tetrahedron first point.
    pub a: Point<Real>,
    /// The tetrahedron second point.
    pub b: Point<Real>,
    /// The tetrahedron third point.
    pub c: Point<Real>,
    /// The tetrahedron fourth point.
    pub d: Point<Real>,
}

impl Tetrahedron {
    /// The local vertex indices of the six edges of a tetrahedron.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment AC.
    /// The 2-nd edge is the segment AD.
    /// The 3-rd edge is the segment BC.
    /// The 4-th edge is the segment BD.
    /// The 5-th edge is the segment CD.
    pub const EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

    /// Creates a tetrahedron from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Tetrahedron {
        Tetrahedron { a, b, c, d }
    }

    /// Creates a tetrahedron from an array of four points.
    #[inline]
    pub fn from_array(arr: [Point<Real>; 4]) -> Tetrahedron {
        Tetrahedron::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// The four vertices of this tetrahedron, in order.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the i-th vertex of this tetrahedron.
    #[inline]
    pub fn vertex(&self, i: usize) -> &Point<Real> {
        match i {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            3 => &self.d,
            _ => panic!("Tetrahedron vertex index out of bounds (must be < 4)."),
        }
    }

    /// Applies the rigid transformation `pos` to every vertex of this tetrahedron.
    #[inline]
    pub fn transformed(&self, pos: &Isometry<Real>) -> Tetrahedron {
        Tetrahedron::new(pos * self.a, pos * self.b, pos * self.c, pos * self.d)
    }

    /// The center and radius used to express points in this tetrahedron's normalized frame.
    ///
    /// The radius is the largest distance between the center and a vertex, or 1 if
    /// all the vertices coincide.
    pub fn normalization(&self) -> (Point<Real>, Real) {
        let center = self.center();
        let radius = self
            .vertices()
            .iter()
            .map(|pt| (pt - center).norm())
            .fold(0.0, Real::max);

        (center, if radius > 0.0 { radius } else { 1.0 })
    }

    /// The 4×4 matrix whose rows are the homogeneous coordinates `[(v - center) / radius, 1]`
    /// of each vertex, with the `(center, radius)` of [`Tetrahedron::normalization`].
    ///
    /// Solving `M * coeffs = values` gives the affine function taking the prescribed
    /// `values` at the vertices, expressed in the normalized frame. Solving
    /// `M^T * weights = [(p - center) / radius, 1]` gives the barycentric coordinates of `p`.
    ///
    /// The entries of this matrix do not depend on the position or the size of the
    /// tetrahedron, only on its shape.
    pub fn normalized_homogeneous_matrix(&self) -> (Matrix4<Real>, Point<Real>, Real) {
        let (center, radius) = self.normalization();
        let [a, b, c, d] = self.vertices().map(|pt| (pt - center) / radius);
        let matrix = Matrix4::new(
            a.x, a.y, a.z, 1.0, //
            b.x, b.y, b.z, 1.0, //
            c.x, c.y, c.z, 1.0, //
            d.x, d.y, d.z, 1.0,
        );
        (matrix, center, radius)
    }

    /// Computes the barycentric coordinates of the given point in the coordinate system of this tetrahedron.
    ///
    /// The returned weights sum to 1 and reconstruct `p` as `Σ weights[k] * vertex(k)`.
    /// Returns `None` if this tetrahedron is degenerate according to `solver`.
    pub fn barycentric_coordinates<S: LinearSolver + ?Sized>(
        &self,
        solver: &S,
        p: &Point<Real>,
    ) -> Option<Vector4<Real>> {
        let (matrix, center, radius) = self.normalized_homogeneous_matrix();
        let local = (p - center) / radius;
        let rhs = Vector4::new(local.x, local.y, local.z, 1.0);
        solver.solve(&matrix.transpose(), &rhs)
    }

    /// Computes the volume of this tetrahedron.
    #[inline]
    pub fn volume(&self) -> Real {
        self.signed_volume().abs()
    }

    /// Computes the signed volume of this tetrahedron.
    ///
    /// If it is positive, `d` is on the half-space pointed by the normal of the oriented triangle
    /// `(a, b, c)`.
    #[inline]
    pub fn signed_volume(&self) -> Real {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ad = self.d - self.a;

        let mat = Matrix::new(ab.x, ac.x, ad.x, ab.y, ac.y, ad.y, ab.z, ac.z, ad.z);

        mat.determinant() / 6.0
    }

    /// Computes the center of this tetrahedron.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.vertices())
    }
}
