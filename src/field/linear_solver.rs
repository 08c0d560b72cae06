use crate::math::{Matrix4, Real, Vector4};

/// A backend for the small dense linear systems of the contact pipeline.
///
/// Every system solved by this crate is a 4×4 system built from the homogeneous
/// coordinates of a tetrahedron's vertices: the affine potential fit and the
/// barycentric weights. Implementations must return `None` instead of an
/// inaccurate solution when the matrix is singular or nearly so.
pub trait LinearSolver {
    /// Solves `matrix * x = rhs` for `x`.
    fn solve(&self, matrix: &Matrix4<Real>, rhs: &Vector4<Real>) -> Option<Vector4<Real>>;
}

/// Tests `|det| <= epsilon * Π ||row_i||`.
///
/// Hadamard's inequality bounds `|det|` by the product of the row norms, so the
/// ratio is scale-invariant and lies in `[0, 1]`. NaN determinants count as singular.
fn is_nearly_singular(matrix: &Matrix4<Real>, determinant: Real, epsilon: Real) -> bool {
    let hadamard_bound: Real = matrix.row_iter().map(|row| row.norm()).product();
    !(determinant.abs() > epsilon * hadamard_bound)
}

fn finite(x: Vector4<Real>) -> Option<Vector4<Real>> {
    x.iter().all(|e| e.is_finite()).then_some(x)
}

/// Solves linear systems with an LU decomposition with partial pivoting.
///
/// This is the default backend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LuSolver {
    /// Relative threshold below which a matrix is considered singular.
    ///
    /// A matrix is rejected when `|det|` is smaller than `singularity_epsilon` times
    /// the product of its row norms.
    pub singularity_epsilon: Real,
}

impl Default for LuSolver {
    fn default() -> Self {
        Self {
            singularity_epsilon: 1.0e-10,
        }
    }
}

impl LinearSolver for LuSolver {
    fn solve(&self, matrix: &Matrix4<Real>, rhs: &Vector4<Real>) -> Option<Vector4<Real>> {
        let lu = matrix.lu();

        if is_nearly_singular(matrix, lu.determinant(), self.singularity_epsilon) {
            return None;
        }

        lu.solve(rhs).and_then(finite)
    }
}

/// Solves linear systems by explicitly inverting the matrix.
///
/// Slightly less accurate than [`LuSolver`], but the inverse is what a closed-form
/// implementation of barycentric coordinates computes, which makes it handy to
/// cross-check results.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InverseSolver {
    /// Relative threshold below which a matrix is considered singular.
    ///
    /// See [`LuSolver::singularity_epsilon`].
    pub singularity_epsilon: Real,
}

impl Default for InverseSolver {
    fn default() -> Self {
        Self {
            singularity_epsilon: 1.0e-10,
        }
    }
}

impl LinearSolver for InverseSolver {
    fn solve(&self, matrix: &Matrix4<Real>, rhs: &Vector4<Real>) -> Option<Vector4<Real>> {
        if is_nearly_singular(matrix, matrix.determinant(), self.singularity_epsilon) {
            return None;
        }

        matrix
            .try_inverse()
            .map(|inv| inv * rhs)
            .and_then(finite)
    }
}
