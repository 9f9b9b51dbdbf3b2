//! Rays and lines used to query bounding volumes.

use crate::math::{Point, Real, Rotation, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction. Points along the ray are `origin + dir * t` for `t ≥ 0`.
///
/// The direction does not need to be normalized. A zero direction is allowed and makes
/// the ray degenerate to its origin.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bvtree3d::query::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::new(2.0, 0.0, 0.0));
/// assert_eq!(ray.point_at(1.5), Point3::new(3.0, 0.0, 0.0));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Computes the point at the given parameter on this ray.
    ///
    /// This computes `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// Expresses this ray in the frame obtained by applying `rot` to the world frame.
    #[inline]
    pub fn inverse_rotated(&self, rot: &Rotation<Real>) -> Ray {
        Ray::new(
            rot.inverse_transform_point(&self.origin),
            rot.inverse_transform_vector(&self.dir),
        )
    }
}

/// An infinite line.
///
/// Points of the line are `point + dir * t` for any real `t`. Like [`Ray`], a zero
/// direction makes the line degenerate to a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// A point of the line.
    pub point: Point<Real>,
    /// Direction of the line.
    pub dir: Vector<Real>,
}

impl Line {
    /// Creates the line passing through `point` with the direction `dir`.
    pub fn new(point: Point<Real>, dir: Vector<Real>) -> Line {
        Line { point, dir }
    }

    /// Creates the line passing through `a` and `b`.
    pub fn through(a: Point<Real>, b: Point<Real>) -> Line {
        Line::new(a, b - a)
    }

    /// Computes the point at the given parameter on this line.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.point + self.dir * t
    }

    /// Expresses this line in the frame obtained by applying `rot` to the world frame.
    #[inline]
    pub fn inverse_rotated(&self, rot: &Rotation<Real>) -> Line {
        Line::new(
            rot.inverse_transform_point(&self.point),
            rot.inverse_transform_vector(&self.dir),
        )
    }

    /// The parameter `t` of the point of this line closest to `pt`.
    ///
    /// Returns `0.0` for a degenerate line.
    pub fn project_parameter(&self, pt: &Point<Real>) -> Real {
        let sq_len = self.dir.norm_squared();

        if sq_len == 0.0 {
            0.0
        } else {
            (pt - self.point).dot(&self.dir) / sq_len
        }
    }
}

impl From<Ray> for Line {
    fn from(ray: Ray) -> Line {
        Line::new(ray.origin, ray.dir)
    }
}
