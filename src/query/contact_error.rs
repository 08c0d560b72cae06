use crate::field::SingularFieldError;

/// Errors that can occur when computing the contact between two tetrahedra.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ContactError {
    /// A tetrahedron index does not exist in its object.
    #[error("tetrahedron index {index} is out of bounds for an object with {count} tetrahedra")]
    TetrahedronOutOfBounds {
        /// The requested tetrahedron index.
        index: usize,
        /// The number of tetrahedra of the object.
        count: usize,
    },
    /// A linear system built from one of the tetrahedra is singular.
    #[error(transparent)]
    SingularField(#[from] SingularFieldError),
}
