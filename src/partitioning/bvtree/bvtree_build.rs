use super::{BvNode, BvTree};
use crate::bounding_volume::BoundingVolume;
use crate::math::Real;
use crate::shape::Boundable;

impl<B: Boundable, V: BoundingVolume> BvTree<B, V> {
    /// Replaces the content of this tree by a tree built over `elements`.
    ///
    /// The root is fitted to all the elements, then every leaf is recursively split in two
    /// until its volume can't split its elements anymore. Internal volumes are finally
    /// enlarged, bottom-up, so each one contains the volumes of its children. Building from
    /// an empty vector results in an empty tree.
    ///
    /// Node layout is deterministic: the two children of a node are stored next to each
    /// other, and all the descendants of a left child are stored before the descendants of
    /// its sibling.
    pub fn build(&mut self, elements: Vec<B>, margin: Real) {
        self.margin = margin;
        self.nodes = build_subtree(elements, margin);
        self.rebuild_leaf_table();

        log::debug!(
            "Built tree with {} nodes and {} leaves.",
            self.nodes.len(),
            self.leaves.len()
        );
    }
}

/// Builds the nodes of a standalone subtree over `elements`. The root is at index 0.
pub(super) fn build_subtree<B: Boundable, V: BoundingVolume>(
    elements: Vec<B>,
    margin: Real,
) -> Vec<BvNode<B, V>> {
    if elements.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![BvNode::leaf(0, None, elements, margin)];
    grow_recursively(&mut nodes, 0);

    // Descendants are stored after their ancestors, so children are final when reached.
    for id in (0..nodes.len()).rev() {
        enclose_children(&mut nodes, id);
    }

    nodes
}

/// Enlarges the volume of the internal node `id` so it contains the volumes of its two
/// children. Does nothing on leaves.
pub(super) fn enclose_children<B, V: BoundingVolume>(nodes: &mut [BvNode<B, V>], id: usize) {
    if let Some([left, right]) = nodes[id].children {
        let (head, tail) = nodes.split_at_mut(id + 1);
        let first = id + 1;
        let _ = head[id].bv.enclose(&tail[left - first].bv);
        let _ = head[id].bv.enclose(&tail[right - first].bv);
    }
}

/// Splits the leaf `id` in two.
///
/// On success, both children are appended to `nodes` and their indices are returned. If the
/// leaf volume can't split its elements, the leaf is left unchanged and `None` is returned.
pub(super) fn grow<B: Boundable, V: BoundingVolume>(
    nodes: &mut Vec<BvNode<B, V>>,
    id: usize,
) -> Option<[usize; 2]> {
    let node = &mut nodes[id];
    debug_assert!(node.is_leaf());

    let right_elements = node.bv.split(&mut node.elements)?;
    let left_elements = std::mem::take(&mut node.elements);
    let margin = node.bv.margin();

    let left = nodes.len();
    let right = left + 1;
    nodes[id].children = Some([left, right]);
    nodes.push(BvNode::leaf(left, Some(id), left_elements, margin));
    nodes.push(BvNode::leaf(right, Some(id), right_elements, margin));

    Some([left, right])
}

/// Grows the leaf `id` and all its new descendants until no leaf can be split.
///
/// The left subtree is fully grown before the right one.
pub(super) fn grow_recursively<B: Boundable, V: BoundingVolume>(
    nodes: &mut Vec<BvNode<B, V>>,
    id: usize,
) {
    let mut stack = vec![id];

    while let Some(id) = stack.pop() {
        if let Some([left, right]) = grow(nodes, id) {
            stack.push(right);
            stack.push(left);
        }
    }
}
