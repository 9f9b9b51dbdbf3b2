use crate::bounding_volume::BoundingVolume;
use crate::math::{Matrix, Point, Real, Vector};
use std::sync::Arc;

/// Client geometry that can be stored in a [`BvTree`](crate::partitioning::BvTree).
///
/// Bounding volumes never inspect the concrete boundable type: fitting, splitting and the
/// nearest-neighbor search all go through this trait.
pub trait Boundable {
    /// The centroid of this boundable.
    ///
    /// Splits partition elements according to the position of their centroid.
    fn centroid(&self) -> Point<Real>;

    /// The covariance of this boundable's geometry about `center`.
    ///
    /// This is the sum of the outer products `(p - center) * (p - center)ᵀ` over the
    /// geometry of `self`. It is left unnormalized since only its principal directions are
    /// used (for fitting oriented boxes).
    fn covariance(&self, center: &Point<Real>) -> Matrix<Real>;

    /// Enlarges `bv` so that it encloses `self`.
    ///
    /// Returns `true` if `bv` had to be modified.
    fn update_bv<V: BoundingVolume>(&self, bv: &mut V) -> bool;

    /// The distance between `pt` and the closest point of `self`, and that closest point.
    fn distance_to_point(&self, pt: &Point<Real>) -> (Real, Point<Real>);

    /// The distance between `pt` and the closest point of `self` reachable by moving from `pt`
    /// along `dir`, and that point.
    ///
    /// The distance is `Real::INFINITY` if no point of `self` lies on the ray `pt + t * dir`
    /// with `t >= 0`.
    fn distance_to_point_along(&self, pt: &Point<Real>, dir: &Vector<Real>) -> (Real, Point<Real>);
}

impl<T: Boundable> Boundable for Arc<T> {
    #[inline]
    fn centroid(&self) -> Point<Real> {
        (**self).centroid()
    }

    #[inline]
    fn covariance(&self, center: &Point<Real>) -> Matrix<Real> {
        (**self).covariance(center)
    }

    #[inline]
    fn update_bv<V: BoundingVolume>(&self, bv: &mut V) -> bool {
        (**self).update_bv(bv)
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> (Real, Point<Real>) {
        (**self).distance_to_point(pt)
    }

    #[inline]
    fn distance_to_point_along(&self, pt: &Point<Real>, dir: &Vector<Real>) -> (Real, Point<Real>) {
        (**self).distance_to_point_along(pt, dir)
    }
}

impl<T: Boundable> Boundable for Box<T> {
    #[inline]
    fn centroid(&self) -> Point<Real> {
        (**self).centroid()
    }

    #[inline]
    fn covariance(&self, center: &Point<Real>) -> Matrix<Real> {
        (**self).covariance(center)
    }

    #[inline]
    fn update_bv<V: BoundingVolume>(&self, bv: &mut V) -> bool {
        (**self).update_bv(bv)
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> (Real, Point<Real>) {
        (**self).distance_to_point(pt)
    }

    #[inline]
    fn distance_to_point_along(&self, pt: &Point<Real>, dir: &Vector<Real>) -> (Real, Point<Real>) {
        (**self).distance_to_point_along(pt, dir)
    }
}
