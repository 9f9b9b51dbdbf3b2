use crate::utils::{leaf_of, rand_dir, rand_point, rand_point_sets};
use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, Obb};
use bvtree3d::math::{Point, Real, Rotation, Vector};
use bvtree3d::partitioning::{BvNode, BvTree};
use bvtree3d::query::{Line, Ray};
use bvtree3d::shape::{Plane, PointSet};

const NUM_ELEMENTS: usize = 200;
const NUM_QUERIES: usize = 50;

/// Panics unless `out` lists exactly the leaves of `tree` whose volume passes `pred`.
fn assert_brute_force<V: BoundingVolume>(
    tree: &BvTree<PointSet, V>,
    out: &[&BvNode<PointSet, V>],
    pred: impl Fn(&V) -> bool,
) {
    let mut found: Vec<_> = out
        .iter()
        .map(|node| {
            assert!(node.is_leaf(), "Internal node {} reported.", node.index());
            node.index()
        })
        .collect();
    found.sort_unstable();

    let mut expected: Vec<_> = tree
        .leaves_list()
        .iter()
        .filter(|leaf| pred(leaf.bounding_volume()))
        .map(|leaf| leaf.index())
        .collect();
    expected.sort_unstable();

    assert_eq!(found, expected);
}

fn contains_leaf<V: BoundingVolume>(out: &[&BvNode<PointSet, V>], leaf: usize) -> bool {
    out.iter().any(|node| node.index() == leaf)
}

/// Random element points along with the leaf containing their element.
fn sample_points<V: BoundingVolume>(
    tree: &BvTree<PointSet, V>,
    rng: &mut oorandom::Rand32,
) -> Vec<(Point<Real>, usize)> {
    (0..NUM_QUERIES)
        .map(|_| {
            let element = rng.rand_range(0..NUM_ELEMENTS as u32) as usize;
            let leaf = leaf_of(tree, element);
            let set = tree
                .get_node(leaf)
                .unwrap()
                .elements()
                .iter()
                .find(|e| e.index() == element)
                .unwrap();
            (set.points()[0], leaf)
        })
        .collect()
}

fn check_queries<V: BoundingVolume>(seed: u64) {
    let tree = BvTree::<_, V>::from_elements(rand_point_sets(seed, NUM_ELEMENTS, 30.0), 0.05);
    let mut rng = oorandom::Rand32::new(seed + 1000);
    let mut out = Vec::new();

    for (pt, leaf) in sample_points(&tree, &mut rng) {
        out.clear();
        let n = tree.intersect_point(&pt, &mut out);
        assert_eq!(n, out.len());
        assert_brute_force(&tree, &out, |bv| bv.intersects_point(&pt));
        assert!(contains_leaf(&out, leaf));

        out.clear();
        let line = Line::new(pt, rand_dir(&mut rng));
        let n = tree.intersect_line(&line, &mut out);
        assert_eq!(n, out.len());
        assert_brute_force(&tree, &out, |bv| bv.intersects_line(&line));
        assert!(contains_leaf(&out, leaf));

        out.clear();
        let origin = pt - rand_dir(&mut rng) * 50.0;
        let ray = Ray::new(origin, pt - origin);
        let _ = tree.intersect_ray(&ray, &mut out);
        assert_brute_force(&tree, &out, |bv| bv.intersects_ray(&ray));
        assert!(contains_leaf(&out, leaf));

        out.clear();
        let plane = Plane::from_point_and_normal(&pt, &rand_dir(&mut rng)).unwrap();
        let _ = tree.intersect_plane(&plane, &mut out);
        assert_brute_force(&tree, &out, |bv| bv.intersects_plane(&plane));
        assert!(contains_leaf(&out, leaf));

        let half_widths = Vector::repeat(0.1);
        let aabb = Aabb::from_half_widths(pt, half_widths, 0.0);
        let ball = BoundingSphere::new(pt, 0.1, 0.0);
        let rotation = Rotation::new(rand_dir(&mut rng));
        let obb = Obb::new(pt, rotation, half_widths, 0.0);

        out.clear();
        let _ = tree.intersect_bv(&aabb, &mut out);
        assert_brute_force(&tree, &out, |bv| bv.intersects(&aabb));
        assert!(contains_leaf(&out, leaf));

        out.clear();
        let _ = tree.intersect_bv(&ball, &mut out);
        assert_brute_force(&tree, &out, |bv| bv.intersects(&ball));
        assert!(contains_leaf(&out, leaf));

        out.clear();
        let _ = tree.intersect_bv(&obb, &mut out);
        assert_brute_force(&tree, &out, |bv| bv.intersects(&obb));
        assert!(contains_leaf(&out, leaf));
    }

    for _ in 0..NUM_QUERIES {
        let center = rand_point(&mut rng, 30.0);
        let radius = rng.rand_float() as Real * 5.0;

        out.clear();
        let _ = tree.intersect_sphere(&center, radius, &mut out);
        assert_brute_force(&tree, &out, |bv| bv.intersects_sphere(&center, radius));

        for leaf in tree.leaves_list() {
            let hit = leaf.elements().iter().any(|set| {
                set.points()
                    .iter()
                    .any(|pt| na::distance(pt, &center) < radius - 1.0e-3)
            });

            if hit {
                assert!(contains_leaf(&out, leaf.index()));
            }
        }

        // Queries unrelated to the elements.
        out.clear();
        let _ = tree.intersect_point(&center, &mut out);
        assert_brute_force(&tree, &out, |bv| bv.intersects_point(&center));

        out.clear();
        let ray = Ray::new(center, rand_dir(&mut rng));
        let _ = tree.intersect_ray(&ray, &mut out);
        assert_brute_force(&tree, &out, |bv| bv.intersects_ray(&ray));

        // Rays pointing away from everything hit nothing.
        out.clear();
        let ray = Ray::new(Point::new(0.0, 0.0, 100.0), Vector::z());
        assert_eq!(tree.intersect_ray(&ray, &mut out), 0);
    }
}

#[test]
fn queries_on_sphere_tree() {
    check_queries::<BoundingSphere>(100);
}

#[test]
fn queries_on_aabb_tree() {
    check_queries::<Aabb>(200);
}

#[test]
fn queries_on_obb_tree() {
    check_queries::<Obb>(300);
}

#[test]
fn aabb_tree_point_and_sphere_queries_match_brute_force() {
    let tree = BvTree::<_, Aabb>::from_elements(rand_point_sets(400, NUM_ELEMENTS, 20.0), 0.1);
    let mut rng = oorandom::Rand32::new(401);
    let mut out = Vec::new();

    for _ in 0..NUM_QUERIES {
        let pt = rand_point(&mut rng, 20.0);
        let expected = tree
            .leaves_list()
            .iter()
            .filter(|leaf| leaf.bounding_volume().intersects_point(&pt))
            .count();
        out.clear();
        assert_eq!(tree.intersect_point(&pt, &mut out), expected);

        let radius = rng.rand_float() as Real * 3.0;
        let expected = tree
            .leaves_list()
            .iter()
            .filter(|leaf| leaf.bounding_volume().intersects_sphere(&pt, radius))
            .count();
        out.clear();
        assert_eq!(tree.intersect_sphere(&pt, radius, &mut out), expected);
    }
}

#[test]
fn leaves_iterator_with_custom_check() {
    let tree = BvTree::<_, Aabb>::from_elements(rand_point_sets(500, NUM_ELEMENTS, 20.0), 0.0);

    assert_eq!(tree.leaves(|_| true).count(), tree.num_leaves());
    assert_eq!(tree.leaves(|_| false).count(), 0);

    let above: Vec<_> = tree
        .leaves(|node| node.bounding_volume().inflated_maxs().z > 0.0)
        .collect();
    assert_eq!(
        above.len(),
        tree.leaves_list()
            .iter()
            .filter(|leaf| leaf.bounding_volume().inflated_maxs().z > 0.0)
            .count()
    );
}
