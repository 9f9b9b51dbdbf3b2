pub use bvtree_nearest::{nearest_boundable, nearest_boundable_along};
pub use bvtree_node::BvNode;
#[cfg(feature = "parallel")]
pub use bvtree_parallel_build::PARALLEL_BUILD_THRESHOLD;
pub use bvtree_traverse::Leaves;
pub use bvtree_tree::{BvTree, BvTreeError};

mod bvtree_build;
mod bvtree_nearest;
mod bvtree_node;
#[cfg(feature = "parallel")]
mod bvtree_parallel_build;
mod bvtree_queries;
mod bvtree_refit;
mod bvtree_traverse;
mod bvtree_traverse_bvtt;
mod bvtree_tree;
mod bvtree_validation;
