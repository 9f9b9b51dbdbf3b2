use super::{BvNode, BvTree, BvTreeError};
use crate::bounding_volume::BoundingVolume;
use crate::shape::Boundable;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl<B: Boundable, V: BoundingVolume> BvTree<B, V> {
    /// Recomputes every volume of this tree after its elements moved.
    ///
    /// The tree structure and the assignment of elements to leaves are left unchanged. Leaf
    /// volumes are fitted to their elements, and internal volumes to the union of their two
    /// children, bottom-up.
    pub fn update(&mut self) {
        for node in &mut self.nodes {
            node.update_leaf_bounds();
        }

        self.update_internal_bounds();
        log::debug!("Refitted tree with {} nodes.", self.nodes.len());
    }

    /// Refits the leaf with the given leaf index after its element `element_index` moved,
    /// then enlarges its ancestors so each one still contains its child.
    ///
    /// Propagation stops at the first ancestor that already contains its child.
    pub fn update_element(
        &mut self,
        leaf_index: usize,
        element_index: usize,
    ) -> Result<(), BvTreeError> {
        let node_id = self.leaf_node_id(leaf_index)?;
        let num_elements = self.nodes[node_id].elements.len();

        if element_index >= num_elements {
            return Err(BvTreeError::ElementIndexOutOfRange {
                index: element_index,
                count: num_elements,
            });
        }

        self.nodes[node_id].update_leaf_bounds();
        update_bounds_up(&mut self.nodes, node_id);
        Ok(())
    }

    /// Fits every internal node to its two children, from the last node to the root.
    pub(super) fn update_internal_bounds(&mut self) {
        for id in (0..self.nodes.len()).rev() {
            update_bounds(&mut self.nodes, id);
        }
    }
}

#[cfg(feature = "parallel")]
impl<B, V> BvTree<B, V>
where
    B: Boundable + Send,
    V: BoundingVolume + Send,
{
    /// Same as [`BvTree::update`], but refits the leaves in parallel on rayon's global
    /// thread pool.
    ///
    /// Internal nodes are refitted afterward, on the calling thread.
    pub fn parallel_update(&mut self) {
        self.nodes
            .par_iter_mut()
            .filter(|node| node.is_leaf())
            .for_each(|node| node.update_leaf_bounds());

        self.update_internal_bounds();
        log::debug!(
            "Refitted tree with {} nodes using {} threads.",
            self.nodes.len(),
            rayon::current_num_threads()
        );
    }
}

/// Fits the internal node `id` to the union of its children. Does nothing on leaves.
fn update_bounds<B, V: BoundingVolume>(nodes: &mut [BvNode<B, V>], id: usize) {
    if let Some([left, right]) = nodes[id].children {
        // Children are always stored after their parent.
        let (head, tail) = nodes.split_at_mut(id + 1);
        let first = id + 1;
        head[id]
            .bv
            .bound_children(&tail[left - first].bv, &tail[right - first].bv);
    }
}

/// Enlarges the ancestors of the node `node_id` so each one contains its updated child.
///
/// Volumes being nested, the walk stops at the first ancestor that already contains its
/// child: nothing above it changed.
fn update_bounds_up<B, V: BoundingVolume>(nodes: &mut [BvNode<B, V>], node_id: usize) {
    let mut child = node_id;

    while let Some(parent) = nodes[child].parent {
        // Ancestors are always stored before their descendants.
        let (head, tail) = nodes.split_at_mut(child);

        if !head[parent].bv.enclose(&tail[0].bv) {
            break;
        }

        child = parent;
    }
}
