/// Error raised when a 4×4 linear system of the contact pipeline is singular.
///
/// Both systems are built from the vertices of a tetrahedron, so this error
/// almost always means the tetrahedron is flat (co-planar vertices) or has
/// duplicate vertex positions.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SingularFieldError {
    /// The affine potential field of a tetrahedron could not be fitted.
    #[error("cannot fit an affine potential field: the tetrahedron vertices are (nearly) co-planar")]
    AffineField,
    /// The barycentric coordinates of a point relative to a tetrahedron could not be computed.
    #[error("cannot compute barycentric weights: the tetrahedron vertices are (nearly) co-planar")]
    BarycentricWeights,
}
