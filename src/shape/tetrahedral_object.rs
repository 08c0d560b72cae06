//! Definition of the tetrahedral soft-body mesh.

use crate::mass_properties;
use crate::math::{Isometry, Point, Real};
use crate::shape::{ConstructionError, Tetrahedron};

/// A soft body described as a tetrahedral mesh carrying a potential field.
///
/// Each vertex stores a scalar potential (a pseudo-pressure, usually zero on the
/// surface of the body and growing toward its interior). Inside a tetrahedron the
/// potential is the affine interpolation of its four vertex potentials.
///
/// The geometry is immutable once built. Only the rigid [`pose`](Self::pose) can
/// be changed, and it is applied to the vertices every time the contact queries
/// read them. The center of mass is computed once, in the local (un-posed) frame.
#[derive(Clone, Debug)]
pub struct TetrahedralObject {
    vertices: Vec<Point<Real>>,
    potentials: Vec<Real>,
    tetrahedra: Vec<[u32; 4]>,
    mass: Real,
    volume: Real,
    local_com: Point<Real>,
    pose: Isometry<Real>,
}

impl TetrahedralObject {
    /// Builds a tetrahedral object with an identity pose.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if `vertices` and `potentials` have different
    /// lengths, if a tetrahedron references an out-of-range or repeated vertex, if a
    /// coordinate or potential is not finite, or if `mass` is not strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use hydroelastic3d::math::Point;
    /// use hydroelastic3d::shape::{ConstructionError, TetrahedralObject};
    ///
    /// let vertices = vec![
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(0.0, 1.0, 0.0),
    ///     Point::new(0.0, 0.0, 1.0),
    /// ];
    ///
    /// let object =
    ///     TetrahedralObject::new(vertices.clone(), vec![0.0, 0.0, 0.0, 1.0], vec![[0, 1, 2, 3]], 2.0)
    ///         .unwrap();
    /// assert_eq!(object.num_tetrahedra(), 1);
    ///
    /// let err = TetrahedralObject::new(vertices, vec![0.0; 3], vec![[0, 1, 2, 3]], 2.0);
    /// assert_eq!(
    ///     err.unwrap_err(),
    ///     ConstructionError::LengthMismatch { vertices: 4, potentials: 3 }
    /// );
    /// ```
    pub fn new(
        vertices: Vec<Point<Real>>,
        potentials: Vec<Real>,
        tetrahedra: Vec<[u32; 4]>,
        mass: Real,
    ) -> Result<Self, ConstructionError> {
        if vertices.len() != potentials.len() {
            return Err(ConstructionError::LengthMismatch {
                vertices: vertices.len(),
                potentials: potentials.len(),
            });
        }

        if !(mass > 0.0 && mass.is_finite()) {
            return Err(ConstructionError::InvalidMass(mass));
        }

        if let Some(i) = vertices
            .iter()
            .position(|pt| pt.iter().any(|x| !x.is_finite()))
        {
            return Err(ConstructionError::NonFiniteVertex(i));
        }

        if let Some(i) = potentials.iter().position(|p| !p.is_finite()) {
            return Err(ConstructionError::NonFinitePotential(i));
        }

        for (tetrahedron, tet) in tetrahedra.iter().enumerate() {
            for (k, &vertex) in tet.iter().enumerate() {
                if vertex as usize >= vertices.len() {
                    return Err(ConstructionError::VertexOutOfBounds {
                        tetrahedron,
                        vertex,
                        num_vertices: vertices.len(),
                    });
                }

                if tet[..k].contains(&vertex) {
                    return Err(ConstructionError::DuplicateVertex {
                        tetrahedron,
                        vertex,
                    });
                }
            }
        }

        let (volume, local_com) =
            mass_properties::tetmesh_volume_and_center_of_mass(&vertices, &tetrahedra);

        log::trace!(
            "Built a tetrahedral object with {} vertices, {} tetrahedra, and volume {}.",
            vertices.len(),
            tetrahedra.len(),
            volume
        );

        Ok(Self {
            vertices,
            potentials,
            tetrahedra,
            mass,
            volume,
            local_com,
            pose: Isometry::identity(),
        })
    }

    /// Returns this object with its pose replaced by `pose`.
    #[must_use]
    pub fn with_pose(mut self, pose: Isometry<Real>) -> Self {
        self.pose = pose;
        self
    }

    /// Sets the rigid pose applied to this object's vertices.
    pub fn set_pose(&mut self, pose: Isometry<Real>) {
        self.pose = pose;
    }

    /// The rigid pose of this object. Identity unless set explicitly.
    #[inline]
    pub fn pose(&self) -> &Isometry<Real> {
        &self.pose
    }

    /// The vertices of this object, in its local frame.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The potential value at each vertex.
    #[inline]
    pub fn potentials(&self) -> &[Real] {
        &self.potentials
    }

    /// The vertex indices of each tetrahedron.
    #[inline]
    pub fn tetrahedra(&self) -> &[[u32; 4]] {
        &self.tetrahedra
    }

    /// The number of tetrahedra of this object.
    #[inline]
    pub fn num_tetrahedra(&self) -> usize {
        self.tetrahedra.len()
    }

    /// The mass of this object.
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// The total volume of this object's tetrahedra.
    #[inline]
    pub fn volume(&self) -> Real {
        self.volume
    }

    /// The center of mass of this object, in its local frame.
    #[inline]
    pub fn center_of_mass(&self) -> &Point<Real> {
        &self.local_com
    }

    /// The center of mass of this object, transformed by its pose.
    #[inline]
    pub fn world_center_of_mass(&self) -> Point<Real> {
        self.pose * self.local_com
    }

    /// The i-th tetrahedron of this object, in its local frame.
    ///
    /// Returns `None` if `i` is out of bounds.
    pub fn local_tetrahedron(&self, i: usize) -> Option<Tetrahedron> {
        let tet = self.tetrahedra.get(i)?;
        Some(Tetrahedron::new(
            self.vertices[tet[0] as usize],
            self.vertices[tet[1] as usize],
            self.vertices[tet[2] as usize],
            self.vertices[tet[3] as usize],
        ))
    }

    /// The i-th tetrahedron of this object, transformed by its pose.
    ///
    /// Returns `None` if `i` is out of bounds.
    pub fn tetrahedron(&self, i: usize) -> Option<Tetrahedron> {
        self.local_tetrahedron(i)
            .map(|tetra| tetra.transformed(&self.pose))
    }

    /// The potential values at the four vertices of the i-th tetrahedron.
    ///
    /// Returns `None` if `i` is out of bounds.
    pub fn tetrahedron_potentials(&self, i: usize) -> Option<[Real; 4]> {
        let tet = self.tetrahedra.get(i)?;
        Some(tet.map(|vid| self.potentials[vid as usize]))
    }
}
