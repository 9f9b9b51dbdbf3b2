//! Shapes bounded by the trees and query shapes.

pub use self::boundable::Boundable;
pub use self::plane::Plane;
pub use self::point_set::PointSet;
pub use self::shared_point_set::{SharedPointSet, SharedPoints};

mod boundable;
mod plane;
mod point_set;
mod shared_point_set;
