use crate::utils::rand_point_sets;
use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, Obb};
use bvtree3d::math::{Real, Vector};
use bvtree3d::partitioning::BvTree;
use bvtree3d::shape::PointSet;

fn sorted_pairs<V1: BoundingVolume, V2: BoundingVolume>(
    tree1: &BvTree<PointSet, V1>,
    tree2: &BvTree<PointSet, V2>,
) -> Vec<(usize, usize)> {
    let mut mine = Vec::new();
    let mut hers = Vec::new();
    let n = tree1.intersect_tree(tree2, &mut mine, &mut hers);
    assert_eq!(n, mine.len());
    assert_eq!(n, hers.len());

    let mut pairs: Vec<_> = mine
        .iter()
        .zip(hers.iter())
        .map(|(a, b)| {
            assert!(a.is_leaf() && b.is_leaf());
            assert!(a.bounding_volume().intersects(b.bounding_volume()));
            (a.index(), b.index())
        })
        .collect();
    pairs.sort_unstable();

    let num_pairs = pairs.len();
    pairs.dedup();
    assert_eq!(pairs.len(), num_pairs, "A pair was reported twice.");
    pairs
}

/// The pairs of leaves of `tree1` and `tree2` whose volumes intersect, sorted.
fn brute_force_pairs<V1: BoundingVolume, V2: BoundingVolume>(
    tree1: &BvTree<PointSet, V1>,
    tree2: &BvTree<PointSet, V2>,
) -> Vec<(usize, usize)> {
    let mut expected = Vec::new();
    for a in tree1.leaves_list() {
        for b in tree2.leaves_list() {
            if a.bounding_volume().intersects(b.bounding_volume()) {
                expected.push((a.index(), b.index()));
            }
        }
    }
    expected.sort_unstable();
    expected
}

const COPY_OFFSET: usize = 1000;

/// Copies of the first `len` sets of `sets`, shifted by a small offset and re-indexed from
/// `COPY_OFFSET`.
fn shifted_copies(sets: &[PointSet], len: usize, shift: Real) -> Vec<PointSet> {
    sets[..len]
        .iter()
        .map(|set| {
            let points = set
                .points()
                .iter()
                .map(|pt| pt + Vector::repeat(shift))
                .collect();
            PointSet::with_points(points, set.index() + COPY_OFFSET)
        })
        .collect()
}

#[test]
fn aabb_trees_match_brute_force() {
    let tree1 = BvTree::<_, Aabb>::from_elements(rand_point_sets(1, 150, 30.0), 0.02);
    let tree2 = BvTree::<_, Aabb>::from_elements(rand_point_sets(2, 90, 30.0), 0.03);

    assert_eq!(sorted_pairs(&tree1, &tree2), brute_force_pairs(&tree1, &tree2));
}

fn check_mixed_trees<V1: BoundingVolume, V2: BoundingVolume>() {
    let sets1 = rand_point_sets(3, 120, 30.0);
    let mut sets2 = rand_point_sets(4, 60, 30.0);
    sets2.extend(shifted_copies(&sets1, 20, 0.005));

    let tree1 = BvTree::<_, V1>::from_elements(sets1, 0.05);
    let tree2 = BvTree::<_, V2>::from_elements(sets2, 0.05);
    let pairs = sorted_pairs(&tree1, &tree2);
    assert_eq!(pairs, brute_force_pairs(&tree1, &tree2));

    // Every copy overlaps its original, so the leaves holding them must be paired.
    for copy_leaf in tree2.leaves_list() {
        for copy in copy_leaf.elements() {
            let Some(id) = copy.index().checked_sub(COPY_OFFSET) else {
                continue;
            };

            let original_leaf = crate::utils::leaf_of(&tree1, id);
            assert!(pairs.contains(&(original_leaf, copy_leaf.index())));
        }
    }
}

#[test]
fn sphere_tree_against_obb_tree() {
    check_mixed_trees::<BoundingSphere, Obb>();
}

#[test]
fn obb_tree_against_aabb_tree() {
    check_mixed_trees::<Obb, Aabb>();
}

#[test]
fn sphere_tree_against_sphere_tree() {
    check_mixed_trees::<BoundingSphere, BoundingSphere>();
}

#[test]
fn aabb_tree_against_sphere_tree() {
    check_mixed_trees::<Aabb, BoundingSphere>();
}

#[test]
fn obb_tree_against_itself() {
    let tree = BvTree::<_, Obb>::from_elements(rand_point_sets(5, 80, 30.0), 0.01);
    let pairs = sorted_pairs(&tree, &tree);
    assert_eq!(pairs, brute_force_pairs(&tree, &tree));

    for leaf in tree.leaves_list() {
        assert!(pairs.contains(&(leaf.index(), leaf.index())));
    }
}

#[test]
fn empty_trees_have_no_pair() {
    let empty = BvTree::<PointSet, Aabb>::new(0.0);
    let tree = BvTree::<_, BoundingSphere>::from_elements(rand_point_sets(6, 10, 5.0), 0.0);
    let mut mine = Vec::new();
    let mut hers = Vec::new();

    assert_eq!(empty.intersect_tree(&tree, &mut mine, &mut hers), 0);
    assert_eq!(tree.intersect_tree(&empty, &mut hers, &mut mine), 0);
    assert!(mine.is_empty() && hers.is_empty());
}
