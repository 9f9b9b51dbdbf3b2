//! Application of the Separating Axis Theorem (SAT) to oriented boxes.
//!
//! Two convex shapes do not intersect if and only if there exists an axis onto which their
//! projections do not overlap. For two boxes in 3D, it is sufficient to test 15 candidate
//! axes: the 3 face normals of each box and the 9 cross products of their edge directions.

pub use self::sat_obb_obb::obb_obb_separated;

mod sat_obb_obb;
