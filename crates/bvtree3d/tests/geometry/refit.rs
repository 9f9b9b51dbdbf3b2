use crate::utils::{assert_coverage, leaf_element_ids, leaf_of, rand_point, rand_point_sets};
use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, Obb};
use bvtree3d::partitioning::BvTree;
use bvtree3d::shape::PointSet;

fn displace_all<V: BoundingVolume>(tree: &mut BvTree<PointSet, V>, rng: &mut oorandom::Rand32) {
    for leaf in 0..tree.num_leaves() {
        for element in tree.leaf_elements_mut(leaf).unwrap() {
            for pt in element.points_mut() {
                *pt += rand_point(rng, 4.0).coords;
            }
        }
    }
}

fn check_refit<V: BoundingVolume>(seed: u64) {
    let mut tree = BvTree::<_, V>::from_elements(rand_point_sets(seed, 250, 30.0), 0.02);
    let mut rng = oorandom::Rand32::new(seed + 1);
    let shape_before: Vec<_> = (0..tree.num_nodes())
        .map(|id| tree.get_node(id).unwrap().children())
        .collect();

    for _ in 0..3 {
        displace_all(&mut tree, &mut rng);
        tree.update();

        tree.assert_well_formed();
        assert_coverage(&tree);
        assert_eq!(leaf_element_ids(&tree), (0..250).collect::<Vec<_>>());
    }

    let shape_after: Vec<_> = (0..tree.num_nodes())
        .map(|id| tree.get_node(id).unwrap().children())
        .collect();
    assert_eq!(shape_before, shape_after);
}

#[test]
fn refit_sphere_tree() {
    check_refit::<BoundingSphere>(1);
}

#[test]
fn refit_aabb_tree() {
    check_refit::<Aabb>(2);
}

#[test]
fn refit_obb_tree() {
    check_refit::<Obb>(3);
}

fn check_single_element_refit<V: BoundingVolume>(seed: u64) {
    let mut tree = BvTree::<_, V>::from_elements(rand_point_sets(seed, 100, 30.0), 0.02);
    let mut rng = oorandom::Rand32::new(seed + 1);

    for _ in 0..30 {
        let element = rng.rand_range(0..100) as usize;
        let leaf = leaf_of(&tree, element);
        let leaf_pos = tree
            .leaves_list()
            .iter()
            .position(|node| node.index() == leaf)
            .unwrap();
        let slot = tree
            .get_leaf(leaf_pos)
            .unwrap()
            .elements()
            .iter()
            .position(|e| e.index() == element)
            .unwrap();

        let target = rand_point(&mut rng, 80.0);
        tree.leaf_elements_mut(leaf_pos).unwrap()[slot].points_mut()[0] = target;
        tree.update_element(leaf_pos, slot).unwrap();

        // Ancestors must still contain the moved leaf.
        tree.assert_well_formed();
        assert_coverage(&tree);

        let mut out = Vec::new();
        let _ = tree.intersect_point(&target, &mut out);
        assert!(out.iter().any(|node| node.index() == leaf));
    }
}

#[test]
fn refit_single_elements_sphere_tree() {
    check_single_element_refit::<BoundingSphere>(4);
}

#[test]
fn refit_single_elements_aabb_tree() {
    check_single_element_refit::<Aabb>(14);
}

#[test]
fn refit_single_elements_obb_tree() {
    check_single_element_refit::<Obb>(24);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_refit_matches_sequential_refit() {
    let mut rng = oorandom::Rand32::new(6);
    let mut sequential = BvTree::<_, Obb>::from_elements(rand_point_sets(7, 400, 30.0), 0.02);
    displace_all(&mut sequential, &mut rng);

    let mut parallel = sequential.clone();
    sequential.update();
    parallel.parallel_update();

    parallel.assert_well_formed();
    assert_coverage(&parallel);

    for id in 0..sequential.num_nodes() {
        assert_eq!(
            sequential.get_node(id).unwrap().bounding_volume(),
            parallel.get_node(id).unwrap().bounding_volume()
        );
    }
}
