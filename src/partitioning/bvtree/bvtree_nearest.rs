use super::BvTree;
use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};
use crate::shape::Boundable;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

/// Finds the element of `tree` closest to `point`.
///
/// Returns the element, its distance to `point`, and its point closest to `point`, or `None`
/// if the tree is empty.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bvtree3d::bounding_volume::BoundingSphere;
/// use bvtree3d::partitioning::{nearest_boundable, BvTree};
/// use bvtree3d::shape::PointSet;
/// use nalgebra::Point3;
///
/// let elements: Vec<_> = (0..10)
///     .map(|i| PointSet::with_points(vec![Point3::new(i as f32, 0.0, 0.0)], i))
///     .collect();
/// let tree = BvTree::<_, BoundingSphere>::from_elements(elements, 0.0);
///
/// let (nearest, dist, _) = nearest_boundable(&tree, &Point3::new(6.8, 1.0, 0.0)).unwrap();
/// assert_eq!(nearest.index(), 7);
/// assert!((dist - 1.0198).abs() < 1.0e-3);
/// # }
/// ```
pub fn nearest_boundable<'a, B: Boundable, V: BoundingVolume>(
    tree: &'a BvTree<B, V>,
    point: &Point<Real>,
) -> Option<(&'a B, Real, Point<Real>)> {
    branch_and_bound(
        tree,
        |bv| bv.distance_to_point(point).0,
        |element| element.distance_to_point(point),
    )
}

/// Finds the element of `tree` first reached when moving from `point` along `dir`.
///
/// Returns the element, the distance travelled from `point`, and the reached point of the
/// element, or `None` if the tree is empty or if no element can be reached.
pub fn nearest_boundable_along<'a, B: Boundable, V: BoundingVolume>(
    tree: &'a BvTree<B, V>,
    point: &Point<Real>,
    dir: &Vector<Real>,
) -> Option<(&'a B, Real, Point<Real>)> {
    branch_and_bound(
        tree,
        |bv| bv.distance_to_point_along(point, dir).0,
        |element| element.distance_to_point_along(point, dir),
    )
}

/// Depth-first branch-and-bound search for the element minimizing `element_dist`.
///
/// `node_dist` must be a lower bound of `element_dist` for every element enclosed by the
/// volume.
fn branch_and_bound<'a, B, V>(
    tree: &'a BvTree<B, V>,
    node_dist: impl Fn(&V) -> Real,
    element_dist: impl Fn(&B) -> (Real, Point<Real>),
) -> Option<(&'a B, Real, Point<Real>)> {
    let root = tree.nodes.first()?;
    let mut best: Option<(&'a B, Real, Point<Real>)> = None;
    let mut best_dist = Real::INFINITY;
    let mut stack: SmallVec<[(usize, Real); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
    stack.push((0, node_dist(&root.bv)));

    while let Some((id, lower_bound)) = stack.pop() {
        if lower_bound >= best_dist {
            continue;
        }

        let node = &tree.nodes[id];

        match node.children {
            None => {
                for element in &node.elements {
                    let (dist, pt) = element_dist(element);

                    if dist < best_dist {
                        best_dist = dist;
                        best = Some((element, dist, pt));
                    }
                }
            }
            Some([left, right]) => {
                let left_dist = node_dist(&tree.nodes[left].bv);
                let right_dist = node_dist(&tree.nodes[right].bv);

                // The closest child is pushed last so it is visited first.
                let mut children = [(left, left_dist), (right, right_dist)];
                if right_dist < left_dist {
                    children.swap(0, 1);
                }

                for child in children.into_iter().rev() {
                    if child.1 < best_dist {
                        stack.push(child);
                    }
                }
            }
        }
    }

    best
}
