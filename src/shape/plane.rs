//! Infinite plane.
use crate::math::{Point, Real, Rotation, UnitVector, Vector, DEFAULT_EPSILON};
use na::Unit;

/// An infinite plane, the set of points `x` such that `normal · x = offset`.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Plane {
    /// The plane's unit normal.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub offset: Real,
}

impl Plane {
    /// Builds a new plane from its unit normal and its offset from the origin.
    #[inline]
    pub fn new(normal: UnitVector<Real>, offset: Real) -> Plane {
        Plane { normal, offset }
    }

    /// Builds the plane passing through `point` and orthogonal to `normal`.
    ///
    /// Returns `None` if `normal` is too close to zero to be normalized.
    pub fn from_point_and_normal(point: &Point<Real>, normal: &Vector<Real>) -> Option<Plane> {
        let normal = Unit::try_new(*normal, DEFAULT_EPSILON)?;
        let offset = normal.dot(&point.coords);
        Some(Plane { normal, offset })
    }

    /// The signed distance between `point` and this plane.
    ///
    /// Positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) - self.offset
    }

    /// The orthogonal projection of `point` on this plane.
    #[inline]
    pub fn project_point(&self, point: &Point<Real>) -> Point<Real> {
        *point - *self.normal * self.signed_distance(point)
    }

    /// This plane expressed in the frame obtained by applying `rot` to the world frame.
    #[inline]
    pub fn inverse_rotated(&self, rot: &Rotation<Real>) -> Plane {
        Plane {
            normal: Unit::new_unchecked(rot.inverse_transform_vector(&self.normal)),
            offset: self.offset,
        }
    }
}
