use approx::assert_relative_eq;
use hydroelastic3d::math::{Isometry, Point, Real, Vector};
use hydroelastic3d::transformation::triangulate_polygon;
use hydroelastic3d::utils;

fn random_vector(rng: &mut oorandom::Rand64) -> Vector<Real> {
    Vector::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * 2.0
        - Vector::repeat(1.0)
}

#[test]
fn fan_triangles_partition_convex_polygons() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..200 {
        let n = rng.rand_range(3..9) as usize;
        let radius = 0.1 + rng.rand_float() * 10.0;
        let step = core::f64::consts::TAU / n as Real;

        // Vertices on a circle: the polygon is convex whatever the angles are.
        let angles: Vec<Real> = (0..n)
            .map(|i| (i as Real + rng.rand_float() * 0.5) * step)
            .collect();
        let expected_area: Real = (0..n)
            .map(|i| {
                let next = if i + 1 == n {
                    angles[0] + core::f64::consts::TAU
                } else {
                    angles[i + 1]
                };
                0.5 * radius * radius * (next - angles[i]).sin()
            })
            .sum();

        let pose = Isometry::new(random_vector(&mut rng) * 10.0, random_vector(&mut rng) * 3.0);
        let mut points: Vec<Point<Real>> = angles
            .iter()
            .map(|a| pose * Point::new(radius * a.cos(), radius * a.sin(), 0.0))
            .collect();

        // The input order must not matter.
        for i in (1..n).rev() {
            let j = rng.rand_range(0..(i as u64 + 1)) as usize;
            points.swap(i, j);
        }

        let triangles = triangulate_polygon(&points);
        assert_eq!(triangles.len(), n - 2);

        let mut area = 0.0;
        let mut reference_normal = None;
        for tri in &triangles {
            let [a, b, c] = tri.map(|i| points[i as usize]);
            area += utils::triangle_area(&a, &b, &c);

            // All the triangles have the same orientation, so none of them folds over another.
            let normal = (b - a).cross(&(c - a));
            let reference = *reference_normal.get_or_insert(normal);
            assert!(normal.dot(&reference) > 0.0);
        }

        assert_relative_eq!(area, expected_area, max_relative = 1.0e-9);
    }
}
