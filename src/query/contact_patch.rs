use crate::field::SeparatingPlane;
use crate::math::{Point, Real, Vector};
use crate::utils;
use na::Unit;

/// The contact surface between two tetrahedra and the pressure integrated over it.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactPatch {
    /// The vertices of the convex contact polygon, in counter-clockwise order when
    /// seen from the projection plane.
    pub polygon: Vec<Point<Real>>,
    /// Fan triangulation of `polygon`, as index triples into `polygon`.
    pub triangles: Vec<[u32; 3]>,
    /// The plane where both potential fields are equal.
    pub plane: SeparatingPlane,
    /// The area of the contact polygon.
    pub area: Real,
    /// The pressure integrated over the contact polygon.
    pub pressure: Real,
}

impl ContactPatch {
    /// The unit normal of the contact surface.
    ///
    /// It points toward increasing values of the first potential field relative to
    /// the second one.
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        self.plane.unit_normal()
    }

    /// The area-weighted centroid of the contact polygon.
    pub fn centroid(&self) -> Point<Real> {
        if self.area <= 0.0 {
            return utils::center(&self.polygon);
        }

        let mut weighted = Vector::zeros();
        for tri in &self.triangles {
            let [a, b, c] = tri.map(|i| self.polygon[i as usize]);
            let tri_area = utils::triangle_area(&a, &b, &c);
            weighted += utils::center(&[a, b, c]).coords * tri_area;
        }

        Point::from(weighted / self.area)
    }
}
