use crate::math::{Point, Real};
use crate::shape::Boundable;

/// Computes the mean of the centroids of a set of boundables.
///
/// All elements are weighted equally. Returns the origin if `elements` is empty.
pub fn boundables_center<B: Boundable>(elements: &[B]) -> Point<Real> {
    if elements.is_empty() {
        return Point::origin();
    }

    let denom: Real = na::convert::<f64, Real>(1.0 / (elements.len() as f64));

    let mut res = Point::origin();
    for elt in elements {
        res += elt.centroid().coords * denom;
    }

    res
}
