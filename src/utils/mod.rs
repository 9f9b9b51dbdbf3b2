//! Centroid and covariance helpers over sets of boundables.

pub use self::center::boundables_center;
pub use self::cov::boundables_cov;

mod center;
mod cov;
