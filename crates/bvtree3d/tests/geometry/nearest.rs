use crate::utils::{rand_dir, rand_point, rand_point_sets};
use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, Obb};
use bvtree3d::math::{Point, Real};
use bvtree3d::partitioning::{nearest_boundable, nearest_boundable_along, BvTree};
use bvtree3d::shape::{Boundable, PointSet};

fn linear_scan(elements: &[PointSet], dist: impl Fn(&PointSet) -> Real) -> Real {
    elements
        .iter()
        .map(dist)
        .fold(Real::INFINITY, Real::min)
}

fn check_nearest<V: BoundingVolume>(seed: u64) {
    let elements = rand_point_sets(seed, 300, 50.0);
    let tree = BvTree::<_, V>::from_elements(elements.clone(), 0.01);
    let mut rng = oorandom::Rand32::new(seed + 1);

    for _ in 0..100 {
        let query = rand_point(&mut rng, 60.0);
        let expected = linear_scan(&elements, |e| e.distance_to_point(&query).0);
        let (nearest, dist, pt) = nearest_boundable(&tree, &query).unwrap();

        assert_relative_eq!(dist, expected, epsilon = 1.0e-4);
        assert_relative_eq!(nearest.distance_to_point(&query).0, dist);
        assert_relative_eq!(na::distance(&pt, &query), dist, epsilon = 1.0e-4);
    }
}

fn check_nearest_along<V: BoundingVolume>(seed: u64) {
    let elements = rand_point_sets(seed, 300, 50.0);
    let tree = BvTree::<_, V>::from_elements(elements.clone(), 0.01);
    let mut rng = oorandom::Rand32::new(seed + 1);

    for _ in 0..100 {
        let target = &elements[rng.rand_range(0..elements.len() as u32) as usize];
        let origin = rand_point(&mut rng, 60.0);
        let dir = target.points()[0] - origin;

        let expected = linear_scan(&elements, |e| e.distance_to_point_along(&origin, &dir).0);
        assert!(expected.is_finite());

        let (_, dist, pt) = nearest_boundable_along(&tree, &origin, &dir).unwrap();
        assert_relative_eq!(dist, expected, epsilon = 1.0e-4);
        assert_relative_eq!(na::distance(&pt, &origin), dist, epsilon = 1.0e-4);
    }

    // Nothing lies along a direction pointing away from all the elements.
    let far = Point::new(0.0, 0.0, 1000.0);
    assert!(nearest_boundable_along(&tree, &far, &rand_dir(&mut rng).map(Real::abs)).is_none());
}

#[test]
fn nearest_in_sphere_tree() {
    check_nearest::<BoundingSphere>(10);
    check_nearest_along::<BoundingSphere>(11);
}

#[test]
fn nearest_in_aabb_tree() {
    check_nearest::<Aabb>(20);
    check_nearest_along::<Aabb>(21);
}

#[test]
fn nearest_in_obb_tree() {
    check_nearest::<Obb>(30);
    check_nearest_along::<Obb>(31);
}

#[test]
fn nearest_in_empty_tree() {
    let tree = BvTree::<PointSet, Obb>::new(0.0);
    assert!(nearest_boundable(&tree, &Point::origin()).is_none());
    assert!(nearest_boundable_along(&tree, &Point::origin(), &na::Vector3::x()).is_none());
}
