use crate::utils::{assert_coverage, leaf_element_ids, rand_point_sets};
use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, Obb};
use bvtree3d::partitioning::BvTree;

fn check_random_builds<V: BoundingVolume>() {
    for (seed, len) in [(0, 1), (1, 2), (2, 17), (3, 128), (4, 500)] {
        let elements = rand_point_sets(seed, len, 40.0);
        let tree = BvTree::<_, V>::from_elements(elements, 0.05);

        tree.assert_well_formed();
        assert_coverage(&tree);
        assert_eq!(leaf_element_ids(&tree), (0..len).collect::<Vec<_>>());
        assert_eq!(tree.reachable_leaf_count(0), tree.num_leaves());
        assert_eq!(tree.reachable_element_count(0), len);

        for id in 0..tree.num_nodes() {
            assert_eq!(tree.get_node(id).unwrap().margin(), 0.05);
        }
    }
}

#[test]
fn random_build_sphere() {
    check_random_builds::<BoundingSphere>();
}

#[test]
fn random_build_aabb() {
    check_random_builds::<Aabb>();
}

#[test]
fn random_build_obb() {
    check_random_builds::<Obb>();
}

#[test]
fn rebuild_replaces_previous_content() {
    let mut tree = BvTree::<_, Aabb>::from_elements(rand_point_sets(10, 100, 10.0), 0.0);
    tree.build(rand_point_sets(11, 7, 10.0), 0.25);

    tree.assert_well_formed();
    assert_eq!(tree.margin(), 0.25);
    assert_eq!(leaf_element_ids(&tree), (0..7).collect::<Vec<_>>());

    tree.build(Vec::new(), 0.0);
    assert!(tree.is_empty());
    assert_eq!(tree.num_leaves(), 0);
    tree.assert_well_formed();
}

#[test]
fn shared_point_sets_follow_their_buffer() {
    use bvtree3d::shape::SharedPointSet;
    use na::Point3;
    use std::sync::{Arc, RwLock};

    let points: Vec<_> = (0..30).map(|i| Point3::new(i as f32, 0.0, 0.0)).collect();
    let buffer = Arc::new(RwLock::new(points));
    // Consecutive sets share one point.
    let elements: Vec<_> = (0..29)
        .map(|i| SharedPointSet::with_points(buffer.clone(), vec![i, i + 1], i))
        .collect();
    let mut tree = BvTree::<_, Aabb>::from_elements(elements, 0.0);
    tree.assert_well_formed();

    // The reported leaves borrow the tree, so each query gets its own output vector.
    let query = Point3::new(14.5, 4.0, 0.0);
    assert_eq!(tree.intersect_point(&query, &mut Vec::new()), 0);

    buffer.write().unwrap()[15].y = 10.0;
    tree.update();

    let root = tree.root().unwrap().bounding_volume();
    assert_relative_eq!(root.maxs.y, 10.0);

    // Only the set 14 spans x in [14, 15].
    let mut out = Vec::new();
    assert_eq!(tree.intersect_point(&query, &mut out), 1);
    assert_eq!(out[0].elements()[0].index(), 14);
}

#[cfg(feature = "parallel")]
mod parallel {
    use crate::utils::{assert_coverage, rand_point_sets};
    use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, Obb};
    use bvtree3d::partitioning::BvTree;

    fn check_parallel_build<V: BoundingVolume + PartialEq + Send>() {
        for (seed, len) in [(20, 3), (21, 65), (22, 1000)] {
            let elements = rand_point_sets(seed, len, 100.0);
            let sequential = BvTree::<_, V>::from_elements(elements.clone(), 0.01);

            for max_threads in [0, 2] {
                let mut parallel = BvTree::<_, V>::new(0.0);
                parallel
                    .parallel_build(elements.clone(), 0.01, max_threads)
                    .unwrap();
                parallel.assert_well_formed();
                assert_coverage(&parallel);

                assert_eq!(sequential.num_nodes(), parallel.num_nodes());
                for id in 0..sequential.num_nodes() {
                    let a = sequential.get_node(id).unwrap();
                    let b = parallel.get_node(id).unwrap();
                    assert_eq!(a.parent(), b.parent());
                    assert_eq!(a.children(), b.children());
                    assert_eq!(a.elements(), b.elements());
                    assert!(a.bounding_volume() == b.bounding_volume());
                }
            }
        }
    }

    #[test]
    fn random_parallel_build_sphere() {
        check_parallel_build::<BoundingSphere>();
    }

    #[test]
    fn random_parallel_build_aabb() {
        check_parallel_build::<Aabb>();
    }

    #[test]
    fn random_parallel_build_obb() {
        check_parallel_build::<Obb>();
    }
}
