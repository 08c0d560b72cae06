use crate::field::SeparatingPlane;
use crate::math::{Point, Real};
use crate::query::VertexOnPlane;
use crate::shape::Tetrahedron;
use arrayvec::ArrayVec;

/// The points where a plane cuts a tetrahedron.
///
/// A plane cuts at most four of the six edges of a tetrahedron (when it separates
/// two vertices from the two others), so four points always suffice.
pub type CrossSection = ArrayVec<Point<Real>, 4>;

/// Computes the cross-section of `tetrahedron` by `plane`.
///
/// The plane's linear form is evaluated at each vertex. For every edge `(i, j)`,
/// in the order given by [`Tetrahedron::EDGES`], whose endpoint values have strictly
/// opposite signs, the point `(1 - t) * v_i + t * v_j` with `t = value_i / (value_i - value_j)`
/// is emitted. Vertices whose value is within `on_plane_epsilon` of zero count as lying
/// on the plane: they never produce edge crossings and are emitted first, in vertex
/// order, if `vertex_on_plane` is [`VertexOnPlane::Include`].
///
/// The returned points are coplanar and are the vertices of a convex polygon, but
/// they are not sorted along its boundary.
pub fn tetrahedron_plane_intersection(
    plane: &SeparatingPlane,
    tetrahedron: &Tetrahedron,
    vertex_on_plane: VertexOnPlane,
    on_plane_epsilon: Real,
) -> CrossSection {
    let vertices = tetrahedron.vertices();
    let values = vertices.map(|pt| plane.signed_value(&pt));
    let signs = values.map(|value| {
        if value.abs() <= on_plane_epsilon {
            0i8
        } else if value > 0.0 {
            1
        } else {
            -1
        }
    });

    let mut result = CrossSection::new();

    if vertex_on_plane == VertexOnPlane::Include {
        for (pt, sign) in vertices.iter().zip(signs.iter()) {
            if *sign == 0 {
                result.push(*pt);
            }
        }
    }

    for (i, j) in Tetrahedron::EDGES {
        if signs[i] * signs[j] < 0 {
            let frac = values[i] / (values[i] - values[j]);
            result.push(vertices[i] * (1.0 - frac) + vertices[j].coords * frac);
        }
    }

    result
}
