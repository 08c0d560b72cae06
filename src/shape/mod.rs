//! Shapes supported by hydroelastic3d.

pub use self::construction_error::ConstructionError;
pub use self::tetrahedral_object::TetrahedralObject;
pub use self::tetrahedron::Tetrahedron;

mod construction_error;
mod tetrahedral_object;
mod tetrahedron;
