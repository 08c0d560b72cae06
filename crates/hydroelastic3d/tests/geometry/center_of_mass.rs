use approx::assert_relative_eq;
use hydroelastic3d::mass_properties;
use hydroelastic3d::math::Point;
use hydroelastic3d::shape::TetrahedralObject;

#[test]
fn two_tetrahedra_center_of_mass() {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(3.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 9.0),
        Point::new(0.0, 6.0, 0.0),
        Point::new(2.0, 4.0, 6.0),
    ];
    let tetrahedra = vec![[0, 1, 2, 3], [1, 2, 3, 4]];

    let com = mass_properties::center_of_mass(&vertices, &tetrahedra);
    assert_relative_eq!(com, Point::new(1.0, 2.0, 3.0), epsilon = 1.0e-6);

    let object = TetrahedralObject::new(vertices, vec![0.0; 5], tetrahedra, 2.0).unwrap();
    assert_relative_eq!(*object.center_of_mass(), com, epsilon = 1.0e-12);
    assert_relative_eq!(object.volume(), 54.0, epsilon = 1.0e-9);
}
