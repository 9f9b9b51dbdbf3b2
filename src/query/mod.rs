//! Geometric queries shared by bounding volumes and trees.
//!
//! This contains the query primitives ([`Ray`] and [`Line`]), the separating-axis test
//! between oriented boxes, and the pairwise intersection test between any two bounding
//! volumes, see [`intersection_test`].

pub use self::intersection_test::intersection_test_volume_volume as intersection_test;
pub use self::ray::{Line, Ray};

pub mod intersection_test;
pub mod ray;
pub mod sat;
