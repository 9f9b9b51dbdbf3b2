use super::{BvNode, BvTree};
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

/// Iterator over the leaves of a [`BvTree`] whose volume, and every ancestor's volume,
/// pass a check. See [`BvTree::leaves`].
pub struct Leaves<'a, B, V, Check: Fn(&BvNode<B, V>) -> bool> {
    tree: &'a BvTree<B, V>,
    next: Option<&'a BvNode<B, V>>,
    stack: SmallVec<[&'a BvNode<B, V>; TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'a, B, V, Check: Fn(&BvNode<B, V>) -> bool> Leaves<'a, B, V, Check> {
    /// Starts iterating from the root of `tree`.
    pub fn new(tree: &'a BvTree<B, V>, check: Check) -> Leaves<'a, B, V, Check> {
        let next = tree.nodes.first().filter(|root| check(root));

        Leaves {
            tree,
            next,
            stack: SmallVec::new(),
            check,
        }
    }
}

impl<'a, B, V, Check: Fn(&BvNode<B, V>) -> bool> Iterator for Leaves<'a, B, V, Check> {
    type Item = &'a BvNode<B, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.next.is_none() {
                self.next = self.stack.pop();
            }

            let node = self.next.take()?;

            let Some([left, right]) = node.children else {
                return Some(node);
            };

            let left = &self.tree.nodes[left];
            let right = &self.tree.nodes[right];

            if (self.check)(left) {
                self.next = Some(left);
            }

            if (self.check)(right) {
                if self.next.is_none() {
                    self.next = Some(right);
                } else {
                    self.stack.push(right);
                }
            }
        }
    }
}

impl<B, V> BvTree<B, V> {
    /// Iterates through the leaves, in depth-first order, left subtree first.
    ///
    /// The `check_node` closure is called on every traversed node. If it returns `false` then
    /// the node and all its descendants won't be iterated on. This is useful for pruning whole
    /// sub-trees based on a geometric predicate on the node's volume.
    pub fn leaves<F: Fn(&BvNode<B, V>) -> bool>(&self, check_node: F) -> Leaves<'_, B, V, F> {
        Leaves::new(self, check_node)
    }
}
