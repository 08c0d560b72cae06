//! Affine potential fields and the linear solvers used to fit them.
//!
//! Inside one tetrahedron, the potential of a soft body is the affine
//! interpolation of its four vertex potentials. Two such fields are equal on a
//! plane: the [`SeparatingPlane`] on which the contact surface lies.

pub use self::affine_field::AffineField;
pub use self::linear_solver::{InverseSolver, LinearSolver, LuSolver};
pub use self::separating_plane::SeparatingPlane;
pub use self::singular_field_error::SingularFieldError;

mod affine_field;
mod linear_solver;
mod separating_plane;
mod singular_field_error;
