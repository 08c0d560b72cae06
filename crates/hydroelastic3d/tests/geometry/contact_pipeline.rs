use approx::assert_relative_eq;
use hydroelastic3d::field::SingularFieldError;
use hydroelastic3d::math::{Point, Real};
use hydroelastic3d::query::{
    self, ContactError, ContactOptions, HydroelasticContext, PressureIntegration, VertexOnPlane,
};
use hydroelastic3d::shape::TetrahedralObject;

fn single_tetrahedron(vertices: [Point<Real>; 4], potentials: [Real; 4]) -> TetrahedralObject {
    TetrahedralObject::new(vertices.to_vec(), potentials.to_vec(), vec![[0, 1, 2, 3]], 1.0)
        .unwrap()
}

fn unit_vertices() -> [Point<Real>; 4] {
    [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ]
}

fn lower() -> TetrahedralObject {
    single_tetrahedron(unit_vertices(), [0.0, 0.0, 0.0, 1.0])
}

fn upper() -> TetrahedralObject {
    single_tetrahedron(
        [
            Point::new(0.0, 0.0, 1.8),
            Point::new(1.0, 0.0, 1.8),
            Point::new(0.0, 1.0, 1.8),
            Point::new(0.0, 0.0, 0.8),
        ],
        [0.0, 0.0, 0.0, 1.0],
    )
}

fn contains_point(polygon: &[Point<Real>], pt: &Point<Real>, epsilon: Real) -> bool {
    polygon.iter().any(|p| (p - pt).norm() < epsilon)
}

#[test]
fn stacked_tetrahedra_intersection() {
    let polygon = query::intersect(&lower(), &upper(), 0, 0).unwrap();
    let expected = [
        Point::new(0.0, 0.0, 0.9),
        Point::new(0.1, 0.0, 0.9),
        Point::new(0.0, 0.1, 0.9),
    ];

    assert_eq!(polygon.len(), expected.len());
    for pt in &expected {
        assert!(
            contains_point(&polygon, pt, 1.0e-4),
            "{pt:?} missing from {polygon:?}"
        );
    }
}

#[test]
fn stacked_tetrahedra_pressure() {
    let pressure = query::pressure(&lower(), &upper(), 0, 0).unwrap();
    assert!((pressure - 0.9).powi(2) < 1.0e-12);

    let weighted = HydroelasticContext::new()
        .with_options(ContactOptions {
            integration: PressureIntegration::AreaWeighted,
            ..ContactOptions::default()
        })
        .pressure(&lower(), &upper(), 0, 0)
        .unwrap();
    assert_relative_eq!(weighted, 0.0045, epsilon = 1.0e-9);
}

#[test]
fn identical_gradients_give_no_contact() {
    // Both fields are `z` up to a constant shift.
    let shifted = single_tetrahedron(unit_vertices(), [0.5, 0.5, 0.5, 1.5]);

    assert!(query::intersect(&lower(), &shifted, 0, 0).unwrap().is_empty());
    assert_eq!(query::pressure(&lower(), &shifted, 0, 0), Ok(0.0));
    assert_eq!(query::contact_patch(&lower(), &shifted, 0, 0), Ok(None));
}

#[test]
fn vertices_on_the_separating_plane() {
    // The fields `z` and `y` are equal on the plane `z = y`, which contains the
    // vertices (0, 0, 0) and (1, 0, 0) and crosses the edge between (0, 1, 0) and (0, 0, 1).
    let other = single_tetrahedron(unit_vertices(), [0.0, 0.0, 1.0, 0.0]);

    let included = query::intersect(&lower(), &other, 0, 0).unwrap();
    assert_eq!(included.len(), 3);
    for pt in [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 0.5, 0.5),
    ] {
        assert!(contains_point(&included, &pt, 1.0e-9));
    }

    let excluded = HydroelasticContext::new()
        .with_options(ContactOptions {
            vertex_on_plane: VertexOnPlane::Exclude,
            ..ContactOptions::default()
        })
        .intersect(&lower(), &other, 0, 0)
        .unwrap();
    assert!(excluded.is_empty());
}

#[test]
fn invalid_queries() {
    assert_eq!(
        query::intersect(&lower(), &upper(), 1, 0),
        Err(ContactError::TetrahedronOutOfBounds { index: 1, count: 1 })
    );

    let flat = single_tetrahedron(
        [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.3, 0.3, 0.0),
        ],
        [0.0, 1.0, 2.0, 3.0],
    );
    assert_eq!(
        query::pressure(&upper(), &flat, 0, 0),
        Err(ContactError::SingularField(SingularFieldError::AffineField))
    );
}

#[test]
fn total_pressure_over_several_pairs() {
    // Two copies of the lower tetrahedron in one object.
    let vertices = unit_vertices().to_vec();
    let doubled = TetrahedralObject::new(
        vertices,
        vec![0.0, 0.0, 0.0, 1.0],
        vec![[0, 1, 2, 3], [1, 0, 2, 3]],
        1.0,
    )
    .unwrap();
    let other = upper();

    let context = HydroelasticContext::new();
    let pairs = [(0, 0), (1, 0)];
    let expected: Real = pairs
        .iter()
        .map(|&(ia, ib)| context.pressure(&doubled, &other, ia, ib).unwrap())
        .sum();

    assert_relative_eq!(expected, 1.8, epsilon = 1.0e-9);
    assert_relative_eq!(
        context.total_pressure(&doubled, &other, &pairs).unwrap(),
        expected,
        epsilon = 1.0e-12
    );
}
