//! Spatial partitioning tools.

#[cfg(feature = "parallel")]
pub use self::bvtree::PARALLEL_BUILD_THRESHOLD;
pub use self::bvtree::{
    nearest_boundable, nearest_boundable_along, BvNode, BvTree, BvTreeError, Leaves,
};

/// A binary tree of bounding volumes.
pub mod bvtree;
