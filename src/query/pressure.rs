use crate::field::{LinearSolver, SingularFieldError};
use crate::math::{Point, Real, Vector4};
use crate::query::PressureIntegration;
use crate::shape::Tetrahedron;
use crate::utils;

/// Integrates the potential of `tetrahedron` over a triangulated contact polygon.
///
/// For each triangle (indices into `polygon`), the barycentric coordinates of its
/// centroid relative to `tetrahedron` are computed and used to interpolate the four
/// vertex `potentials`. The samples are accumulated according to `integration`.
///
/// # Errors
///
/// Fails if `tetrahedron` is too degenerate for its barycentric coordinates to be
/// computed by `solver`.
pub fn integrate_pressure<S: LinearSolver + ?Sized>(
    solver: &S,
    polygon: &[Point<Real>],
    triangles: &[[u32; 3]],
    tetrahedron: &Tetrahedron,
    potentials: &[Real; 4],
    integration: PressureIntegration,
) -> Result<Real, SingularFieldError> {
    let potentials = Vector4::from_column_slice(potentials);
    let mut total = 0.0;

    for tri in triangles {
        let [a, b, c] = tri.map(|i| polygon[i as usize]);
        let centroid = utils::center(&[a, b, c]);
        let weights = tetrahedron
            .barycentric_coordinates(solver, &centroid)
            .ok_or(SingularFieldError::BarycentricWeights)?;
        let sample = weights.dot(&potentials);

        total += match integration {
            PressureIntegration::CentroidSum => sample,
            PressureIntegration::AreaWeighted => sample * utils::triangle_area(&a, &b, &c),
        };
    }

    Ok(total)
}
