use super::{BvNode, BvTree};
use crate::bounding_volume::BoundingVolume;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

impl<B, V: BoundingVolume> BvTree<B, V> {
    /// Traverses the Bounding Volume Test Tree of `self` against `other`.
    ///
    /// Every pair of leaves `(mine[i], hers[i])` whose volumes intersect is appended to `mine`
    /// and `hers`. A pair of nodes is only expanded if their volumes intersect. When a leaf
    /// faces an internal node, only the internal node is expanded.
    ///
    /// Returns the number of pairs appended.
    pub fn intersect_tree<'a, 'b, B2, V2: BoundingVolume>(
        &'a self,
        other: &'b BvTree<B2, V2>,
        mine: &mut Vec<&'a BvNode<B, V>>,
        hers: &mut Vec<&'b BvNode<B2, V2>>,
    ) -> usize {
        if self.nodes.is_empty() || other.nodes.is_empty() {
            return 0;
        }

        let mut num_pairs = 0;
        let mut stack: SmallVec<[(usize, usize); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        stack.push((0, 0));

        while let Some((id1, id2)) = stack.pop() {
            let node1 = &self.nodes[id1];
            let node2 = &other.nodes[id2];

            if !node1.bv.intersects(&node2.bv) {
                continue;
            }

            // Pairs are pushed in reverse order so they get popped left first.
            match (node1.children, node2.children) {
                (None, None) => {
                    mine.push(node1);
                    hers.push(node2);
                    num_pairs += 1;
                }
                (None, Some([left2, right2])) => {
                    stack.push((id1, right2));
                    stack.push((id1, left2));
                }
                (Some([left1, right1]), None) => {
                    stack.push((right1, id2));
                    stack.push((left1, id2));
                }
                (Some([left1, right1]), Some([left2, right2])) => {
                    stack.push((right1, right2));
                    stack.push((right1, left2));
                    stack.push((left1, right2));
                    stack.push((left1, left2));
                }
            }
        }

        num_pairs
    }
}
