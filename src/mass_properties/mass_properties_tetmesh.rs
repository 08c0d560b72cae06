use crate::math::{Point, Real};
use crate::shape::Tetrahedron;
use crate::utils;
use num::Zero;

/// Computes the center-of-mass of a tetrahedral mesh with uniform density.
///
/// This is the average of every tetrahedron's centroid, weighted by its (unsigned)
/// volume, so the orientation of the tetrahedra does not matter.
///
/// If the mesh has no volume (no tetrahedra, or only flat ones), the average of the
/// vertices referenced by the tetrahedra is returned instead, and the origin if
/// there are none.
///
/// # Panics
///
/// Panics if a tetrahedron references a vertex outside of `vertices`.
///
/// # Examples
///
/// ```
/// use hydroelastic3d::mass_properties::center_of_mass;
/// use hydroelastic3d::math::Point;
///
/// let vertices = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(3.0, 0.0, 0.0),
///     Point::new(0.0, 0.0, 9.0),
///     Point::new(0.0, 6.0, 0.0),
///     Point::new(2.0, 4.0, 6.0),
/// ];
/// let com = center_of_mass(&vertices, &[[0, 1, 2, 3], [1, 2, 3, 4]]);
///
/// assert!((com - Point::new(1.0, 2.0, 3.0)).norm() < 1.0e-6);
/// ```
pub fn center_of_mass(vertices: &[Point<Real>], tetrahedra: &[[u32; 4]]) -> Point<Real> {
    tetmesh_volume_and_center_of_mass(vertices, tetrahedra).1
}

/// Computes the total volume and center-of-mass of a tetrahedral mesh.
///
/// See [`center_of_mass`] for the conventions used.
pub fn tetmesh_volume_and_center_of_mass(
    vertices: &[Point<Real>],
    tetrahedra: &[[u32; 4]],
) -> (Real, Point<Real>) {
    let mut res = Point::origin();
    let mut vol = 0.0;

    for tet in tetrahedra {
        let tetrahedron = Tetrahedron::new(
            vertices[tet[0] as usize],
            vertices[tet[1] as usize],
            vertices[tet[2] as usize],
            vertices[tet[3] as usize],
        );
        let volume = tetrahedron.volume();

        res += tetrahedron.center().coords * volume;
        vol += volume;
    }

    if vol.is_zero() {
        let referenced: Vec<_> = tetrahedra
            .iter()
            .flatten()
            .map(|i| vertices[*i as usize])
            .collect();

        if referenced.is_empty() {
            (vol, Point::origin())
        } else {
            (vol, utils::center(&referenced))
        }
    } else {
        (vol, res / vol)
    }
}
