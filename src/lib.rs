/*!
hydroelastic3d
==============

**hydroelastic3d** computes hydroelastic contact pressure between soft bodies
represented as tetrahedral meshes carrying a scalar potential (pseudo-pressure)
field.

For one tetrahedron of each body, the contact surface is the plane where the two
affine potential fields are equal. That plane is cut by both tetrahedra, the two
cross-sections are intersected, and the potential is integrated over the
resulting convex contact patch.

```
use hydroelastic3d::math::Point;
use hydroelastic3d::query;
use hydroelastic3d::shape::TetrahedralObject;

let soft = TetrahedralObject::new(
    vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ],
    vec![0.0, 0.0, 0.0, 1.0],
    vec![[0, 1, 2, 3]],
    1.0,
)?;
let other = TetrahedralObject::new(
    vec![
        Point::new(0.0, 0.0, 1.8),
        Point::new(1.0, 0.0, 1.8),
        Point::new(0.0, 1.0, 1.8),
        Point::new(0.0, 0.0, 0.8),
    ],
    vec![0.0, 0.0, 0.0, 1.0],
    vec![[0, 1, 2, 3]],
    1.0,
)?;

let polygon = query::intersect(&soft, &other, 0, 0)?;
assert_eq!(polygon.len(), 3);

let pressure = query::pressure(&soft, &other, 0, 0)?;
assert!((pressure - 0.9).abs() < 1.0e-6);
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod field;
pub mod mass_properties;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{
        Isometry3, Matrix3, Matrix4, Point2, Point3, Translation3, Vector2, Vector3, Vector4,
    };

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;
}
