//! Volume and center-of-mass of tetrahedral meshes.

pub use self::mass_properties_tetmesh::{center_of_mass, tetmesh_volume_and_center_of_mass};

mod mass_properties_tetmesh;
