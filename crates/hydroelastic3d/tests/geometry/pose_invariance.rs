use approx::assert_relative_eq;
use hydroelastic3d::math::{Isometry, Point, Real, Vector};
use hydroelastic3d::query::{self, ContactOptions, HydroelasticContext, PressureIntegration};
use hydroelastic3d::shape::TetrahedralObject;

fn objects() -> (TetrahedralObject, TetrahedralObject) {
    let a = TetrahedralObject::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ],
        vec![0.0, 0.0, 0.0, 1.0],
        vec![[0, 1, 2, 3]],
        1.0,
    )
    .unwrap();
    let b = TetrahedralObject::new(
        vec![
            Point::new(0.0, 0.0, 1.8),
            Point::new(1.0, 0.0, 1.8),
            Point::new(0.0, 1.0, 1.8),
            Point::new(0.0, 0.0, 0.8),
        ],
        vec![0.0, 0.0, 0.0, 1.0],
        vec![[0, 1, 2, 3]],
        1.0,
    )
    .unwrap();
    (a, b)
}

#[test]
fn moving_both_objects_moves_the_contact() {
    let (a, b) = objects();
    let pose = Isometry::new(Vector::new(3.0, -1.0, 2.0), Vector::new(0.4, -0.7, 1.1));
    let moved_a = a.clone().with_pose(pose);
    let mut moved_b = b.clone();
    moved_b.set_pose(pose);

    let polygon = query::intersect(&a, &b, 0, 0).unwrap();
    let moved_polygon = query::intersect(&moved_a, &moved_b, 0, 0).unwrap();
    assert_eq!(polygon.len(), moved_polygon.len());
    for pt in &polygon {
        let expected = pose * pt;
        assert!(moved_polygon
            .iter()
            .any(|p| (p - expected).norm() < 1.0e-9));
    }

    let context = HydroelasticContext::new().with_options(ContactOptions {
        integration: PressureIntegration::AreaWeighted,
        ..ContactOptions::default()
    });
    let pressure: Real = context.pressure(&a, &b, 0, 0).unwrap();
    let moved_pressure = context.pressure(&moved_a, &moved_b, 0, 0).unwrap();
    assert_relative_eq!(pressure, moved_pressure, epsilon = 1.0e-9);

    assert_relative_eq!(
        moved_a.world_center_of_mass(),
        pose * a.center_of_mass(),
        epsilon = 1.0e-12
    );
}

#[test]
fn moving_one_object_away_breaks_the_contact() {
    let (a, b) = objects();
    let b = b.with_pose(Isometry::translation(0.0, 0.0, 5.0));

    assert!(query::intersect(&a, &b, 0, 0).unwrap().is_empty());
    assert_eq!(query::pressure(&a, &b, 0, 0), Ok(0.0));
}
