use super::bvtree_build::{build_subtree, enclose_children};
use super::{BvNode, BvTree, BvTreeError};
use crate::bounding_volume::BoundingVolume;
use crate::math::Real;
use crate::shape::Boundable;

/// Minimum number of elements of a subtree for its two halves to be built in parallel.
///
/// Smaller subtrees are built sequentially by the task that reached them.
pub const PARALLEL_BUILD_THRESHOLD: usize = 64;

impl<B, V> BvTree<B, V>
where
    B: Boundable + Send,
    V: BoundingVolume + Send,
{
    /// Replaces the content of this tree by a tree built over `elements`, in parallel.
    ///
    /// The work is executed on a dedicated thread pool with `max_threads` threads, or with
    /// rayon's default number of threads if `max_threads` is 0. The resulting tree is
    /// identical to the one produced by [`BvTree::build`], node and leaf indices included.
    ///
    /// If the thread pool can't be created, an error is returned and `self` is left unchanged.
    pub fn parallel_build(
        &mut self,
        elements: Vec<B>,
        margin: Real,
        max_threads: usize,
    ) -> Result<(), BvTreeError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads)
            .build()?;
        let num_threads = pool.current_num_threads();

        self.nodes = pool.install(|| build_subtree_parallel(elements, margin));
        self.margin = margin;
        self.rebuild_leaf_table();

        log::debug!(
            "Built tree with {} nodes and {} leaves using {} threads.",
            self.nodes.len(),
            self.leaves.len(),
            num_threads
        );

        Ok(())
    }
}

fn build_subtree_parallel<B, V>(elements: Vec<B>, margin: Real) -> Vec<BvNode<B, V>>
where
    B: Boundable + Send,
    V: BoundingVolume + Send,
{
    if elements.len() < PARALLEL_BUILD_THRESHOLD {
        return build_subtree(elements, margin);
    }

    let mut root: BvNode<B, V> = BvNode::leaf(0, None, elements, margin);
    let right = match root.bv.split(&mut root.elements) {
        Some(right) => right,
        None => return vec![root],
    };
    let left = std::mem::take(&mut root.elements);

    log::trace!(
        "Forking subtree build: {} left elements, {} right elements.",
        left.len(),
        right.len()
    );

    let (left_nodes, right_nodes) = rayon::join(
        || build_subtree_parallel(left, margin),
        || build_subtree_parallel(right, margin),
    );

    let mut nodes = stitch(root, left_nodes, right_nodes);
    enclose_children(&mut nodes, 0);
    nodes
}

/// Makes two standalone subtrees the children of `parent`.
///
/// The result has the same layout as if the whole subtree was grown sequentially: the two
/// subtree roots at indices 1 and 2, then the rest of the left subtree, then the rest of
/// the right subtree.
fn stitch<B, V>(
    mut parent: BvNode<B, V>,
    left: Vec<BvNode<B, V>>,
    right: Vec<BvNode<B, V>>,
) -> Vec<BvNode<B, V>> {
    let num_left = left.len();
    let remap_left = |i: usize| if i == 0 { 1 } else { i + 2 };
    let remap_right = move |i: usize| if i == 0 { 2 } else { i + num_left + 1 };

    parent.children = Some([1, 2]);
    let mut nodes = Vec::with_capacity(1 + left.len() + right.len());
    nodes.push(parent);

    let mut left = left.into_iter().map(|node| relocate(node, remap_left));
    let mut right = right.into_iter().map(|node| relocate(node, remap_right));

    nodes.extend(left.next());
    nodes.extend(right.next());
    nodes.extend(left);
    nodes.extend(right);
    nodes
}

fn relocate<B, V>(mut node: BvNode<B, V>, remap: impl Fn(usize) -> usize) -> BvNode<B, V> {
    node.index = remap(node.index);
    node.parent = Some(node.parent.map(&remap).unwrap_or(0));
    node.children = node.children.map(|[l, r]| [remap(l), remap(r)]);
    node
}
