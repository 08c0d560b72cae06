use approx::assert_relative_eq;
use hydroelastic3d::math::{Isometry, Point, Real, Vector};
use hydroelastic3d::query::{self, ContactOptions, HydroelasticContext, PressureIntegration};
use hydroelastic3d::shape::TetrahedralObject;

/// The stacked tetrahedra touching on the plane z = 0.9, scaled by `scale`.
fn stacked_pair(scale: Real) -> (TetrahedralObject, TetrahedralObject) {
    let build = |vertices: [[Real; 3]; 4]| {
        TetrahedralObject::new(
            vertices
                .iter()
                .map(|v| Point::new(v[0], v[1], v[2]) * scale)
                .collect(),
            vec![0.0, 0.0, 0.0, 1.0],
            vec![[0, 1, 2, 3]],
            1.0,
        )
        .unwrap()
    };

    (
        build([
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]),
        build([
            [0.0, 0.0, 1.8],
            [1.0, 0.0, 1.8],
            [0.0, 1.0, 1.8],
            [0.0, 0.0, 0.8],
        ]),
    )
}

fn area_weighted() -> HydroelasticContext {
    HydroelasticContext::new().with_options(ContactOptions {
        integration: PressureIntegration::AreaWeighted,
        ..ContactOptions::default()
    })
}

#[test]
fn small_tetrahedra_far_from_the_origin() {
    let translations = [
        Vector::zeros(),
        Vector::new(10.0, 10.0, 10.0),
        Vector::new(-1.0e3, 2.0e2, 5.0e2),
        Vector::new(3.0e4, -1.0e4, 2.0e4),
    ];

    for scale in [1.0, 0.01] {
        let (a, b) = stacked_pair(scale);

        for translation in translations {
            let pose = Isometry::translation(translation.x, translation.y, translation.z);
            let a = a.clone().with_pose(pose);
            let b = b.clone().with_pose(pose);

            let pressure = query::pressure(&a, &b, 0, 0).unwrap();
            assert_relative_eq!(pressure, 0.9, epsilon = 1.0e-6);

            let patch = query::contact_patch(&a, &b, 0, 0).unwrap().unwrap();
            assert_eq!(patch.polygon.len(), 3);
            assert_relative_eq!(patch.area, 0.005 * scale * scale, max_relative = 1.0e-6);
        }
    }
}

#[test]
fn random_rigid_motions_keep_area_and_pressure() {
    let mut rng = oorandom::Rand64::new(7);
    let mut random_vector = move |amplitude: Real| {
        Vector::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * (2.0 * amplitude)
            - Vector::repeat(amplitude)
    };
    let context = area_weighted();

    for scale in [1.0, 0.1, 0.01] {
        let (a, b) = stacked_pair(scale);
        let reference = context.contact_patch(&a, &b, 0, 0).unwrap().unwrap();
        assert_relative_eq!(reference.area, 0.005 * scale * scale, max_relative = 1.0e-9);
        assert_relative_eq!(
            reference.pressure,
            0.9 * 0.005 * scale * scale,
            max_relative = 1.0e-9
        );

        for _ in 0..100 {
            let pose = Isometry::new(random_vector(100.0), random_vector(3.0));
            let moved_a = a.clone().with_pose(pose);
            let moved_b = b.clone().with_pose(pose);

            let patch = context
                .contact_patch(&moved_a, &moved_b, 0, 0)
                .unwrap()
                .unwrap_or_else(|| panic!("contact lost under {pose:?}"));
            assert_relative_eq!(patch.area, reference.area, max_relative = 1.0e-6);
            assert_relative_eq!(patch.pressure, reference.pressure, max_relative = 1.0e-6);
        }
    }
}

#[test]
fn nearly_vertical_planes_keep_their_contact() {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    // The field `x`.
    let a = TetrahedralObject::new(
        vertices.clone(),
        vec![0.0, 1.0, 0.0, 0.0],
        vec![[0, 1, 2, 3]],
        1.0,
    )
    .unwrap();

    for tilt in [0.0, 1.0e-12, 1.0e-9, 1.0e-6] {
        // The field `1 - x + tilt * z`: both fields are equal on a plane that is
        // vertical, or almost.
        let b = TetrahedralObject::new(
            vertices.clone(),
            vec![1.0, 0.0, 1.0, 1.0 + tilt],
            vec![[0, 1, 2, 3]],
            1.0,
        )
        .unwrap();

        let patch = query::contact_patch(&a, &b, 0, 0)
            .unwrap()
            .unwrap_or_else(|| panic!("contact lost with tilt {tilt}"));
        assert_eq!(patch.polygon.len(), 3);
        assert_relative_eq!(patch.area, 0.125, epsilon = 1.0e-5);
        assert_relative_eq!(patch.pressure, 0.5, epsilon = 1.0e-5);

        let weighted = area_weighted().pressure(&a, &b, 0, 0).unwrap();
        assert_relative_eq!(weighted, 0.0625, epsilon = 1.0e-5);
    }
}
