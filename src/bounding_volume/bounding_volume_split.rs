//! Mean-based partitioning of boundables shared by every bounding volume.

use crate::math::{Point, Real, Vector};
use crate::shape::Boundable;
use std::cmp::Ordering;

pub(crate) fn element_centroids<B: Boundable>(elements: &[B]) -> Vec<Point<Real>> {
    elements.iter().map(|e| e.centroid()).collect()
}

/// The world axes sorted by decreasing `extent`.
pub(crate) fn world_axes_by_decreasing(extent: &Vector<Real>) -> [Vector<Real>; 3] {
    let mut ids = [0, 1, 2];
    ids.sort_by(|a, b| {
        extent[*b]
            .partial_cmp(&extent[*a])
            .unwrap_or(Ordering::Equal)
    });
    ids.map(|i| {
        let mut axis = Vector::zeros();
        axis[i] = 1.0;
        axis
    })
}

/// Splits `elements` along the first of `axes` that leaves both groups non-empty.
///
/// Along an axis, the elements whose centroid projection is strictly smaller than the mean
/// projection stay in `elements`, the others are returned. Relative order is preserved in
/// both groups.
pub(crate) fn split_along_axes<B: Boundable>(
    elements: &mut Vec<B>,
    centroids: &[Point<Real>],
    axes: &[Vector<Real>],
) -> Option<Vec<B>> {
    let n = elements.len();
    if n < 2 {
        return None;
    }

    for axis in axes {
        let projections: Vec<Real> = centroids.iter().map(|c| c.coords.dot(axis)).collect();
        let mean = projections.iter().sum::<Real>() / (n as Real);
        let num_left = projections.iter().filter(|p| **p < mean).count();

        if num_left == 0 || num_left == n {
            continue;
        }

        let mut left = Vec::with_capacity(num_left);
        let mut right = Vec::with_capacity(n - num_left);

        for (elt, proj) in elements.drain(..).zip(projections) {
            if proj < mean {
                left.push(elt);
            } else {
                right.push(elt);
            }
        }

        *elements = left;
        return Some(right);
    }

    None
}
