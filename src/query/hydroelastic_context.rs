use arrayvec::ArrayVec;

use crate::field::{AffineField, LinearSolver, LuSolver, SeparatingPlane};
use crate::math::{Point, Point2, Real};
use crate::query::clip::{self, ProjectionAxes};
use crate::query::{
    integrate_pressure, tetrahedron_plane_intersection, ContactError, ContactOptions,
    ContactPatch,
};
use crate::shape::{TetrahedralObject, Tetrahedron};
use crate::transformation;
use crate::utils;

/// One posed tetrahedron of an object together with its vertex potentials.
struct PotentialTetrahedron {
    shape: Tetrahedron,
    potentials: [Real; 4],
}

impl PotentialTetrahedron {
    fn get(object: &TetrahedralObject, index: usize) -> Result<Self, ContactError> {
        let out_of_bounds = ContactError::TetrahedronOutOfBounds {
            index,
            count: object.num_tetrahedra(),
        };
        let shape = object.tetrahedron(index).ok_or(out_of_bounds)?;
        let potentials = object.tetrahedron_potentials(index).ok_or(out_of_bounds)?;
        Ok(Self { shape, potentials })
    }
}

/// A non-degenerate contact polygon and its fan triangulation.
struct ContactPolygon {
    plane: SeparatingPlane,
    polygon: Vec<Point<Real>>,
    triangles: Vec<[u32; 3]>,
}

/// The numerical backend and tolerances driving hydroelastic contact queries.
///
/// A context is immutable and cheap to share: any number of queries may run on it
/// concurrently, as long as the solver is `Sync`.
///
/// # Examples
///
/// ```
/// use hydroelastic3d::field::InverseSolver;
/// use hydroelastic3d::math::Point;
/// use hydroelastic3d::query::{ContactOptions, HydroelasticContext, PressureIntegration};
/// use hydroelastic3d::shape::TetrahedralObject;
///
/// let vertices = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
/// ];
/// let a = TetrahedralObject::new(vertices.clone(), vec![0.0, 0.0, 0.0, 1.0], vec![[0, 1, 2, 3]], 1.0)?;
/// let b = TetrahedralObject::new(vertices, vec![0.0, 0.0, 1.0, 0.0], vec![[0, 1, 2, 3]], 1.0)?;
///
/// let context = HydroelasticContext::new()
///     .with_solver(InverseSolver::default())
///     .with_options(ContactOptions {
///         integration: PressureIntegration::AreaWeighted,
///         ..ContactOptions::default()
///     });
///
/// let patch = context.contact_patch(&a, &b, 0, 0)?.expect("the fields cross");
/// assert!(patch.area > 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HydroelasticContext<S: LinearSolver = LuSolver> {
    solver: S,
    options: ContactOptions,
}

impl HydroelasticContext<LuSolver> {
    /// A context with the default LU solver and default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: LinearSolver> HydroelasticContext<S> {
    /// Replaces the options of this context.
    #[must_use]
    pub fn with_options(mut self, options: ContactOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the linear solver of this context.
    #[must_use]
    pub fn with_solver<T: LinearSolver>(self, solver: T) -> HydroelasticContext<T> {
        HydroelasticContext {
            solver,
            options: self.options,
        }
    }

    /// The options of this context.
    #[inline]
    pub fn options(&self) -> &ContactOptions {
        &self.options
    }

    /// The linear solver of this context.
    #[inline]
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Computes the contact polygon between the tetrahedron `tet_a` of `a` and the
    /// tetrahedron `tet_b` of `b`.
    ///
    /// The polygon lies on the plane where the potential fields of both tetrahedra are
    /// equal and is the overlap of both tetrahedra's cross-sections by this plane. It
    /// is empty if the fields are parallel, if the cross-sections don't overlap, or if
    /// their overlap is too thin to be triangulated.
    pub fn intersect(
        &self,
        a: &TetrahedralObject,
        b: &TetrahedralObject,
        tet_a: usize,
        tet_b: usize,
    ) -> Result<Vec<Point<Real>>, ContactError> {
        let tetra_a = PotentialTetrahedron::get(a, tet_a)?;
        let tetra_b = PotentialTetrahedron::get(b, tet_b)?;
        Ok(self
            .contact_polygon(&tetra_a, &tetra_b)?
            .map(|contact| contact.polygon)
            .unwrap_or_default())
    }

    /// Computes the contact polygon, its triangulation and the pressure integrated over it.
    ///
    /// Returns `Ok(None)` when [`HydroelasticContext::intersect`] would return an empty polygon.
    pub fn contact_patch(
        &self,
        a: &TetrahedralObject,
        b: &TetrahedralObject,
        tet_a: usize,
        tet_b: usize,
    ) -> Result<Option<ContactPatch>, ContactError> {
        let tetra_a = PotentialTetrahedron::get(a, tet_a)?;
        let tetra_b = PotentialTetrahedron::get(b, tet_b)?;

        let Some(ContactPolygon {
            plane,
            polygon,
            triangles,
        }) = self.contact_polygon(&tetra_a, &tetra_b)?
        else {
            return Ok(None);
        };

        let area: Real = triangles
            .iter()
            .map(|tri| {
                let [p0, p1, p2] = tri.map(|i| polygon[i as usize]);
                utils::triangle_area(&p0, &p1, &p2)
            })
            .sum();
        // The pressure is sampled in the field of the first object only.
        let pressure = integrate_pressure(
            &self.solver,
            &polygon,
            &triangles,
            &tetra_a.shape,
            &tetra_a.potentials,
            self.options.integration,
        )?;

        Ok(Some(ContactPatch {
            polygon,
            triangles,
            plane,
            area,
            pressure,
        }))
    }

    /// Computes the pressure between the tetrahedron `tet_a` of `a` and the tetrahedron
    /// `tet_b` of `b`.
    ///
    /// This is zero if the tetrahedra have no contact polygon.
    pub fn pressure(
        &self,
        a: &TetrahedralObject,
        b: &TetrahedralObject,
        tet_a: usize,
        tet_b: usize,
    ) -> Result<Real, ContactError> {
        Ok(self
            .contact_patch(a, b, tet_a, tet_b)?
            .map_or(0.0, |patch| patch.pressure))
    }

    /// Sums the pressures of the given pairs of tetrahedra of `a` and `b`.
    ///
    /// Each pair is `(tet_a, tet_b)`. Fails on the first pair for which
    /// [`HydroelasticContext::pressure`] fails.
    #[cfg(not(feature = "parallel"))]
    pub fn total_pressure(
        &self,
        a: &TetrahedralObject,
        b: &TetrahedralObject,
        pairs: &[(usize, usize)],
    ) -> Result<Real, ContactError> {
        pairs
            .iter()
            .map(|&(tet_a, tet_b)| self.pressure(a, b, tet_a, tet_b))
            .sum()
    }

    /// Sums the pressures of the given pairs of tetrahedra of `a` and `b`.
    ///
    /// Each pair is `(tet_a, tet_b)`. The pairs are processed in parallel. Fails if
    /// [`HydroelasticContext::pressure`] fails on any pair.
    #[cfg(feature = "parallel")]
    pub fn total_pressure(
        &self,
        a: &TetrahedralObject,
        b: &TetrahedralObject,
        pairs: &[(usize, usize)],
    ) -> Result<Real, ContactError>
    where
        S: Sync,
    {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .map(|&(tet_a, tet_b)| self.pressure(a, b, tet_a, tet_b))
            .try_reduce(|| 0.0, |x, y| Ok(x + y))
    }

    fn contact_polygon(
        &self,
        tetra_a: &PotentialTetrahedron,
        tetra_b: &PotentialTetrahedron,
    ) -> Result<Option<ContactPolygon>, ContactError> {
        let options = &self.options;
        let field_a = AffineField::fit(&self.solver, &tetra_a.shape, &tetra_a.potentials)?;
        let field_b = AffineField::fit(&self.solver, &tetra_b.shape, &tetra_b.potentials)?;
        let plane = SeparatingPlane::between(&field_a, &field_b);

        if plane.is_degenerate(options.degenerate_plane_epsilon) {
            log::debug!(
                "Parallel potential fields, no contact surface: {:?}",
                plane.coeffs
            );
            return Ok(None);
        }

        let section_a = tetrahedron_plane_intersection(
            &plane,
            &tetra_a.shape,
            options.vertex_on_plane,
            options.on_plane_epsilon,
        );
        let section_b = tetrahedron_plane_intersection(
            &plane,
            &tetra_b.shape,
            options.vertex_on_plane,
            options.on_plane_epsilon,
        );

        if section_a.len() < 3 || section_b.len() < 3 {
            log::debug!(
                "Cross-sections without area: {} and {} points.",
                section_a.len(),
                section_b.len()
            );
            return Ok(None);
        }

        let Some(axes) = ProjectionAxes::for_plane(&plane) else {
            return Ok(None);
        };

        // `clip_epsilon` is a distance on the plane: shrink it like the projected polygons.
        let clip_epsilon = options.clip_epsilon * axes.area_ratio(&plane);
        let project = |section: &[Point<Real>]| {
            let flat: ArrayVec<Point2<Real>, 4> =
                section.iter().map(|pt| axes.project(pt)).collect();
            clip::ccw_convex_polygon(&flat, clip_epsilon)
        };
        let polygon_a = project(&section_a);
        let polygon_b = project(&section_b);
        let clipped = clip::clip_convex_polygons(&polygon_a, &polygon_b, clip_epsilon);

        if clipped.is_empty() {
            return Ok(None);
        }

        let polygon: Vec<_> = clipped
            .iter()
            .map(|pt| axes.unproject(&plane, pt))
            .collect();

        // Slivers the triangulation rejects have no contact either, so that `intersect`
        // and `pressure` always agree.
        let triangles = transformation::triangulate_polygon(&polygon);
        if triangles.is_empty() {
            log::debug!(
                "Discarding a contact polygon too thin to be triangulated: {:?}",
                polygon
            );
            return Ok(None);
        }

        Ok(Some(ContactPolygon {
            plane,
            polygon,
            triangles,
        }))
    }
}

/// Computes the contact polygon between two tetrahedra with the default context.
///
/// See [`HydroelasticContext::intersect`].
pub fn intersect(
    a: &TetrahedralObject,
    b: &TetrahedralObject,
    tet_a: usize,
    tet_b: usize,
) -> Result<Vec<Point<Real>>, ContactError> {
    HydroelasticContext::new().intersect(a, b, tet_a, tet_b)
}

/// Computes the contact patch between two tetrahedra with the default context.
///
/// See [`HydroelasticContext::contact_patch`].
pub fn contact_patch(
    a: &TetrahedralObject,
    b: &TetrahedralObject,
    tet_a: usize,
    tet_b: usize,
) -> Result<Option<ContactPatch>, ContactError> {
    HydroelasticContext::new().contact_patch(a, b, tet_a, tet_b)
}

/// Computes the pressure between two tetrahedra with the default context.
///
/// See [`HydroelasticContext::pressure`].
pub fn pressure(
    a: &TetrahedralObject,
    b: &TetrahedralObject,
    tet_a: usize,
    tet_b: usize,
) -> Result<Real, ContactError> {
    HydroelasticContext::new().pressure(a, b, tet_a, tet_b)
}
