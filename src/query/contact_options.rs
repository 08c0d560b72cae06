use crate::math::Real;

/// How a tetrahedron vertex lying exactly on the separating plane is handled.
///
/// A vertex is "on the plane" when the absolute value of the plane's linear form
/// at this vertex is at most [`ContactOptions::on_plane_epsilon`]. Such a vertex
/// never produces an edge crossing, because no edge touching it has endpoints of
/// strictly opposite signs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VertexOnPlane {
    /// The vertex itself is reported as a cross-section point.
    ///
    /// A plane passing through one vertex and crossing the opposite face then gives
    /// a triangle instead of a segment.
    #[default]
    Include,
    /// The vertex is dropped: only strict sign changes along edges produce points.
    Exclude,
}

/// How the potential is accumulated over the triangles of a contact patch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PressureIntegration {
    /// Sums one potential sample (taken at the centroid) per triangle, regardless of its area.
    ///
    /// The result depends on the triangulation: a patch cut into more triangles
    /// accumulates more samples.
    #[default]
    CentroidSum,
    /// Sums the centroid potential of each triangle multiplied by the triangle's area.
    ///
    /// The potential is affine over each triangle, so this is the exact surface
    /// integral of the potential over the contact patch.
    AreaWeighted,
}

/// Tolerances and policies of the hydroelastic contact pipeline.
///
/// # Examples
///
/// ```
/// use hydroelastic3d::query::{ContactOptions, PressureIntegration};
///
/// let options = ContactOptions {
///     integration: PressureIntegration::AreaWeighted,
///     ..ContactOptions::default()
/// };
/// assert_eq!(options.degenerate_plane_epsilon, 1.0e-6);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactOptions {
    /// Two potential fields whose gradients differ by a vector with a squared norm
    /// smaller than this value define no contact surface.
    pub degenerate_plane_epsilon: Real,
    /// Policy for tetrahedron vertices lying on the separating plane.
    pub vertex_on_plane: VertexOnPlane,
    /// Vertices where the absolute value of the plane's linear form is at most this
    /// value are considered on the plane.
    ///
    /// The linear form is a potential difference, not a distance.
    pub on_plane_epsilon: Real,
    /// Distance tolerance on the separating plane used when clipping the cross-sections.
    ///
    /// It is scaled down with the projected polygons, so it keeps the same meaning
    /// whatever the orientation of the plane.
    ///
    /// Points closer than this to a clipping edge count as inside, and consecutive
    /// points closer than this to each other are merged.
    pub clip_epsilon: Real,
    /// How the potential is integrated over the contact patch.
    pub integration: PressureIntegration,
}

impl Default for ContactOptions {
    fn default() -> Self {
        Self {
            degenerate_plane_epsilon: 1.0e-6,
            vertex_on_plane: VertexOnPlane::Include,
            on_plane_epsilon: 0.0,
            clip_epsilon: 1.0e-9,
            integration: PressureIntegration::CentroidSum,
        }
    }
}
