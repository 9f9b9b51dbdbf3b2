use super::BvTree;
use crate::bounding_volume::BoundingVolume;
use crate::math::Real;
use std::collections::HashSet;

/// Relative tolerance on volume nesting, scaled by the parent's bounding radius.
const NESTING_TOLERANCE: Real = 1.0e-4;

impl<B, V> BvTree<B, V> {
    /// Counts the number of leaves that can be reached from the node at index `id`.
    ///
    /// This is mostly a utility for debugging.
    pub fn reachable_leaf_count(&self, id: usize) -> usize {
        let mut count = 0;
        let mut stack = vec![id];

        while let Some(id) = stack.pop() {
            match self.nodes[id].children {
                Some([left, right]) => stack.extend([right, left]),
                None => count += 1,
            }
        }

        count
    }

    /// Counts the number of elements stored in the leaves reachable from the node at index
    /// `id`.
    pub fn reachable_element_count(&self, id: usize) -> usize {
        let mut count = 0;
        let mut stack = vec![id];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            count += node.elements.len();

            if let Some([left, right]) = node.children {
                stack.extend([right, left]);
            }
        }

        count
    }
}

impl<B, V: BoundingVolume> BvTree<B, V> {
    /// Panics if the tree isn't well-formed.
    ///
    /// The tree is well-formed if:
    /// - every node is either a leaf with at least one element, or an internal node with
    ///   exactly two children and no element;
    /// - node indices, parent links and child links are consistent, children being stored
    ///   after their parent;
    /// - every node is reachable exactly once from the root;
    /// - the leaf table lists every leaf, in depth-first order;
    /// - the volume of every internal node contains the volumes of its children, up to a
    ///   small tolerance accounting for rounding errors.
    ///
    /// Element coverage is not checked.
    pub fn assert_well_formed(&self) {
        if self.nodes.is_empty() {
            assert!(self.leaves.is_empty());
            return;
        }

        assert!(self.nodes[0].parent.is_none(), "The root must not have a parent.");

        let mut loop_detection = HashSet::new();
        let mut leaves = Vec::new();
        let mut stack = vec![0];

        while let Some(id) = stack.pop() {
            if !loop_detection.insert(id) {
                panic!("Detected loop. Node {} visited twice.", id);
            }

            let node = &self.nodes[id];
            assert_eq!(node.index, id);

            match node.children {
                Some([left, right]) => {
                    assert!(node.elements.is_empty(), "Internal node {} has elements.", id);
                    assert_ne!(left, right);

                    let tolerance =
                        NESTING_TOLERANCE * (1.0 + node.bv.bounding_sphere().radius());
                    let loosened = node.bv.loosened(tolerance);

                    for child in [left, right] {
                        assert!(child > id, "Child {} stored before its parent {}.", child, id);
                        assert_eq!(self.nodes[child].parent, Some(id));
                        assert!(
                            loosened.contains(&self.nodes[child].bv),
                            "Child {} sticks out of its parent {}.",
                            child,
                            id
                        );
                    }

                    stack.push(right);
                    stack.push(left);
                }
                None => {
                    assert!(!node.elements.is_empty(), "Leaf {} has no element.", id);
                    leaves.push(id);
                }
            }
        }

        assert_eq!(loop_detection.len(), self.nodes.len(), "Unreachable nodes.");
        assert_eq!(leaves, self.leaves, "Inconsistent leaf table.");
        assert_eq!(
            self.reachable_element_count(0),
            self.leaves
                .iter()
                .map(|id| self.nodes[*id].elements.len())
                .sum::<usize>()
        );
        // A binary tree with n leaves has n - 1 internal nodes.
        assert_eq!(self.nodes.len(), 2 * self.leaves.len() - 1);
    }
}
