use crate::math::Real;

#[cfg(doc)]
use crate::shape::TetrahedralObject;

/// Errors that can occur when building a [`TetrahedralObject`].
///
/// Construction validates every input array once, so the contact queries can
/// index vertices and potentials without further checks.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum ConstructionError {
    /// The number of potential values differs from the number of vertices.
    #[error("the object has {vertices} vertices but {potentials} potential values")]
    LengthMismatch {
        /// The number of vertices given.
        vertices: usize,
        /// The number of potential values given.
        potentials: usize,
    },
    /// A tetrahedron references a vertex that does not exist.
    #[error("tetrahedron {tetrahedron} references the vertex {vertex}, but the object only has {num_vertices} vertices")]
    VertexOutOfBounds {
        /// The index of the faulty tetrahedron.
        tetrahedron: usize,
        /// The out-of-bounds vertex index.
        vertex: u32,
        /// The number of vertices of the object.
        num_vertices: usize,
    },
    /// A tetrahedron references the same vertex more than once.
    #[error("tetrahedron {tetrahedron} references the vertex {vertex} more than once")]
    DuplicateVertex {
        /// The index of the faulty tetrahedron.
        tetrahedron: usize,
        /// The repeated vertex index.
        vertex: u32,
    },
    /// A vertex position has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
    /// A potential value is NaN or infinite.
    #[error("the potential of vertex {0} is not finite")]
    NonFinitePotential(usize),
    /// The mass is zero, negative, or not finite.
    #[error("the mass must be strictly positive and finite, got {0}")]
    InvalidMass(Real),
}
