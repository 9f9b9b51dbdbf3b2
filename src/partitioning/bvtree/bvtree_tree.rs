use super::bvtree_build::enclose_children;
use super::BvNode;
use crate::bounding_volume::BoundingVolume;
use crate::math::Real;
use crate::shape::Boundable;

/// Errors returned by the accessors and the parallel operations of a [`BvTree`].
#[derive(thiserror::Error, Debug)]
pub enum BvTreeError {
    /// A node index was out of the range of the tree's nodes.
    #[error("node index {index} is out of range, the tree has {count} nodes")]
    NodeIndexOutOfRange {
        /// The invalid index.
        index: usize,
        /// The number of nodes of the tree.
        count: usize,
    },
    /// A leaf index was out of the range of the tree's leaves.
    #[error("leaf index {index} is out of range, the tree has {count} leaves")]
    LeafIndexOutOfRange {
        /// The invalid index.
        index: usize,
        /// The number of leaves of the tree.
        count: usize,
    },
    /// An element index was out of the range of a leaf's elements.
    #[error("element index {index} is out of range, the leaf has {count} elements")]
    ElementIndexOutOfRange {
        /// The invalid index.
        index: usize,
        /// The number of elements of the leaf.
        count: usize,
    },
    /// The thread pool of a parallel operation could not be created.
    #[cfg(feature = "parallel")]
    #[error("failed to create the thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A binary tree of bounding volumes over a set of [`Boundable`] elements.
///
/// All the nodes are stored in a single vector. The root has index 0 and the children of a
/// node always have larger indices than their parent. Leaves are numbered separately, in
/// depth-first order (left subtree first), and can be accessed with [`BvTree::get_leaf`].
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bvtree3d::bounding_volume::Aabb;
/// use bvtree3d::partitioning::BvTree;
/// use bvtree3d::shape::PointSet;
/// use nalgebra::Point3;
///
/// let elements: Vec<_> = (0..10)
///     .map(|i| PointSet::with_points(vec![Point3::new(i as f32, 0.0, 0.0)], i))
///     .collect();
/// let tree = BvTree::<_, Aabb>::from_elements(elements, 0.0);
///
/// let mut hits = Vec::new();
/// assert_eq!(tree.intersect_sphere(&Point3::new(4.0, 0.0, 0.0), 0.5, &mut hits), 1);
/// assert_eq!(hits[0].elements()[0].index(), 4);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct BvTree<B, V> {
    pub(super) nodes: Vec<BvNode<B, V>>,
    pub(super) leaves: Vec<usize>,
    pub(super) margin: Real,
}

impl<B: Boundable, V: BoundingVolume> Default for BvTree<B, V> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<B: Boundable, V: BoundingVolume> BvTree<B, V> {
    /// An empty tree whose nodes will be inflated by `margin`.
    pub fn new(margin: Real) -> Self {
        Self {
            nodes: Vec::new(),
            leaves: Vec::new(),
            margin,
        }
    }

    /// Builds a tree over the given elements.
    ///
    /// See [`BvTree::build`].
    pub fn from_elements(elements: Vec<B>, margin: Real) -> Self {
        let mut result = Self::new(margin);
        result.build(elements, margin);
        result
    }

    /// The margin every node volume of this tree is inflated by.
    #[inline]
    pub fn margin(&self) -> Real {
        self.margin
    }

    /// Sets the margin of this tree and of every one of its nodes.
    ///
    /// Internal nodes are then enlarged where needed so they still contain their children.
    pub fn set_margin(&mut self, margin: Real) {
        self.margin = margin;

        for node in &mut self.nodes {
            node.bv.set_margin(margin);
        }

        // Oriented boxes inflated in different frames may stick out of their parents.
        for id in (0..self.nodes.len()).rev() {
            enclose_children(&mut self.nodes, id);
        }
    }

    /// The root of this tree, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<&BvNode<B, V>> {
        self.nodes.first()
    }

    /// Is this tree empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The radius of the bounding sphere of the root volume, or 0 if the tree is empty.
    pub fn radius(&self) -> Real {
        self.root()
            .map(|root| root.bounding_sphere().radius)
            .unwrap_or(0.0)
    }

    /// The number of nodes of this tree.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The number of leaves of this tree.
    #[inline]
    pub fn num_leaves(&self) -> usize {
        self.leaves.len()
    }

    /// The node with the given index.
    pub fn get_node(&self, index: usize) -> Result<&BvNode<B, V>, BvTreeError> {
        self.nodes
            .get(index)
            .ok_or(BvTreeError::NodeIndexOutOfRange {
                index,
                count: self.nodes.len(),
            })
    }

    /// The leaf with the given leaf index.
    ///
    /// Leaf indices range from 0 to `self.num_leaves()` and follow a depth-first order.
    pub fn get_leaf(&self, index: usize) -> Result<&BvNode<B, V>, BvTreeError> {
        let node_id = self.leaf_node_id(index)?;
        Ok(&self.nodes[node_id])
    }

    /// All the leaves of this tree, in leaf index order.
    pub fn leaves_list(&self) -> Vec<&BvNode<B, V>> {
        self.leaves.iter().map(|id| &self.nodes[*id]).collect()
    }

    /// Mutable access to the elements of the leaf with the given leaf index.
    ///
    /// The elements can be moved but the volumes of the tree are not updated automatically.
    /// Call [`BvTree::update`] or [`BvTree::update_element`] afterward.
    pub fn leaf_elements_mut(&mut self, index: usize) -> Result<&mut [B], BvTreeError> {
        let node_id = self.leaf_node_id(index)?;
        Ok(&mut self.nodes[node_id].elements)
    }

    pub(super) fn leaf_node_id(&self, index: usize) -> Result<usize, BvTreeError> {
        self.leaves
            .get(index)
            .copied()
            .ok_or(BvTreeError::LeafIndexOutOfRange {
                index,
                count: self.leaves.len(),
            })
    }

    /// Numbers the leaves in depth-first order, left subtree first.
    pub(super) fn rebuild_leaf_table(&mut self) {
        self.leaves.clear();

        if self.nodes.is_empty() {
            return;
        }

        let mut stack = vec![0];

        while let Some(id) = stack.pop() {
            match self.nodes[id].children {
                Some([left, right]) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => self.leaves.push(id),
            }
        }
    }
}
