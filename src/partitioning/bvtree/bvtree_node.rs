use crate::bounding_volume::{BoundingSphere, BoundingVolume};
use crate::math::Real;
use crate::shape::Boundable;

/// A node of a [`BvTree`](super::BvTree).
///
/// A node is either a leaf, holding at least one element and no children, or an internal
/// node, holding exactly two children and no element. Nodes refer to each other through
/// their index in the tree's node storage.
#[derive(Clone, Debug)]
pub struct BvNode<B, V> {
    pub(super) index: usize,
    pub(super) bv: V,
    pub(super) elements: Vec<B>,
    pub(super) children: Option<[usize; 2]>,
    pub(super) parent: Option<usize>,
}

impl<B: Boundable, V: BoundingVolume> BvNode<B, V> {
    /// A leaf node with a volume fitted to `elements`.
    pub(super) fn leaf(index: usize, parent: Option<usize>, elements: Vec<B>, margin: Real) -> Self {
        let mut bv = V::empty(margin);
        bv.bound(&elements);

        Self {
            index,
            bv,
            elements,
            children: None,
            parent,
        }
    }

    /// Recomputes the volume of this leaf from its elements.
    ///
    /// Does nothing on internal nodes since their volume depends on their children.
    #[inline]
    pub(super) fn update_leaf_bounds(&mut self) {
        if self.is_leaf() {
            self.bv.bound(&self.elements);
        }
    }
}

impl<B, V: BoundingVolume> BvNode<B, V> {
    /// The index of this node in the tree's node storage.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The index of the parent of this node, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// The indices of the two children of this node, or `None` for a leaf.
    #[inline]
    pub fn children(&self) -> Option<[usize; 2]> {
        self.children
    }

    /// The bounding volume of this node.
    #[inline]
    pub fn bounding_volume(&self) -> &V {
        &self.bv
    }

    /// The elements of this node. Empty unless this node is a leaf.
    #[inline]
    pub fn elements(&self) -> &[B] {
        &self.elements
    }

    /// The number of elements of this node.
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// The number of children of this node, either 0 or 2.
    #[inline]
    pub fn num_children(&self) -> usize {
        if self.children.is_some() {
            2
        } else {
            0
        }
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Is this node the root of its tree?
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// A sphere enclosing the (inflated) volume of this node.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bv.bounding_sphere()
    }

    /// The margin of the volume of this node.
    #[inline]
    pub fn margin(&self) -> Real {
        self.bv.margin()
    }
}
