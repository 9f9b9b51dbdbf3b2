#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod build_invariants;
mod nearest;
mod queries;
mod refit;
mod tree_tree;
