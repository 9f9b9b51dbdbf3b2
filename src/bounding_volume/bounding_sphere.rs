//! Bounding sphere.

use crate::bounding_volume::bounding_volume_split::{
    element_centroids, split_along_axes, world_axes_by_decreasing,
};
use crate::bounding_volume::{BoundingVolume, VolumeRef};
use crate::math::{Point, Real, Vector};
use crate::query::{Line, Ray};
use crate::shape::{Boundable, Plane};
use crate::utils;
use num::Zero;

/// A Bounding Sphere.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere, ignoring its margin.
    pub radius: Real,
    /// The margin added to the radius by queries.
    pub margin: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real, margin: Real) -> BoundingSphere {
        BoundingSphere {
            center,
            radius,
            margin,
        }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius, ignoring its margin.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The bounding sphere radius, including its margin.
    #[inline]
    pub fn inflated_radius(&self) -> Real {
        self.radius + self.margin
    }

    /// The parameter of the point of `origin + dir * t` closest to the center, if `dir`
    /// isn't zero.
    fn closest_parameter(&self, origin: &Point<Real>, dir: &Vector<Real>) -> Option<Real> {
        let sq_len = dir.norm_squared();

        if sq_len.is_zero() {
            None
        } else {
            Some((self.center - origin).dot(dir) / sq_len)
        }
    }
}

impl BoundingVolume for BoundingSphere {
    fn empty(margin: Real) -> Self {
        BoundingSphere::new(Point::origin(), 0.0, margin)
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }

    #[inline]
    fn set_margin(&mut self, margin: Real) {
        self.margin = margin;
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects_point(&self, pt: &Point<Real>) -> bool {
        let r = self.inflated_radius();
        na::distance_squared(&self.center, pt) <= r * r
    }

    #[inline]
    fn intersects_sphere(&self, center: &Point<Real>, radius: Real) -> bool {
        let sum_radius = self.inflated_radius() + radius;
        na::distance_squared(&self.center, center) <= sum_radius * sum_radius
    }

    fn intersects_line(&self, line: &Line) -> bool {
        let t = self
            .closest_parameter(&line.point, &line.dir)
            .unwrap_or(0.0);
        self.intersects_point(&line.point_at(t))
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        let t = self
            .closest_parameter(&ray.origin, &ray.dir)
            .unwrap_or(0.0)
            .max(0.0);
        self.intersects_point(&ray.point_at(t))
    }

    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> bool {
        plane.signed_distance(&self.center).abs() <= self.inflated_radius()
    }

    fn distance_to_point(&self, pt: &Point<Real>) -> (Real, Point<Real>) {
        let r = self.inflated_radius();
        let delta = pt - self.center;
        let dist = delta.norm();

        if dist <= r {
            (0.0, *pt)
        } else {
            (dist - r, self.center + delta * (r / dist))
        }
    }

    fn distance_to_point_along(&self, pt: &Point<Real>, dir: &Vector<Real>) -> (Real, Point<Real>) {
        if self.intersects_point(pt) {
            return (0.0, *pt);
        }

        // Solve |pt + dir * t - center|² = r² for the smallest root.
        let r = self.inflated_radius();
        let dpos = pt - self.center;
        let a = dir.norm_squared();
        let b = dpos.dot(dir);
        let c = dpos.norm_squared() - r * r;
        let discr = b * b - a * c;

        if a.is_zero() || b > 0.0 || discr < 0.0 {
            return (Real::INFINITY, *pt);
        }

        let t = ((-b - discr.sqrt()) / a).max(0.0);
        (t * a.sqrt(), pt + dir * t)
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.inflated_radius(), 0.0)
    }

    fn update_point(&mut self, pt: &Point<Real>) -> bool {
        let delta = pt - self.center;
        let dist = delta.norm();

        if dist <= self.radius {
            return false;
        }

        // Ritter's growth: the new sphere touches both `pt` and the far side of the old one.
        let new_radius = (self.radius + dist) * 0.5;
        self.center += delta * ((new_radius - self.radius) / dist);
        self.radius = new_radius.max(na::distance(&self.center, pt));
        true
    }

    fn update_sphere(&mut self, center: &Point<Real>, radius: Real) -> bool {
        let delta = center - self.center;
        let dist = delta.norm();

        if dist + radius <= self.radius {
            return false;
        }

        if dist + self.radius <= radius {
            self.center = *center;
            self.radius = radius;
            return true;
        }

        let new_radius = (dist + self.radius + radius) * 0.5;
        self.center += delta * ((new_radius - self.radius) / dist);
        self.radius = new_radius.max(na::distance(&self.center, center) + radius);
        true
    }

    #[inline]
    fn contains(&self, other: &Self) -> bool {
        na::distance(&self.center, &other.center) + other.inflated_radius()
            <= self.inflated_radius()
    }

    #[inline]
    fn enclose(&mut self, other: &Self) -> bool {
        self.update_sphere(&other.center, other.radius)
    }

    fn bound<B: Boundable>(&mut self, elements: &[B]) {
        self.center = utils::boundables_center(elements);
        self.radius = 0.0;

        for element in elements {
            let _ = element.update_bv(self);
        }
    }

    fn bound_children(&mut self, a: &Self, b: &Self) {
        self.center = a.center;
        self.radius = a.radius;
        let _ = self.update_sphere(&b.center, b.radius);
    }

    fn split<B: Boundable>(&self, elements: &mut Vec<B>) -> Option<Vec<B>> {
        if elements.len() < 2 {
            return None;
        }

        let centroids = element_centroids(elements);
        let mut mins = centroids[0];
        let mut maxs = centroids[0];

        for c in &centroids[1..] {
            mins = mins.inf(c);
            maxs = maxs.sup(c);
        }

        let axes = world_axes_by_decreasing(&(maxs - mins));
        split_along_axes(elements, &centroids, &axes)
    }

    #[inline]
    fn as_volume_ref(&self) -> VolumeRef<'_> {
        VolumeRef::Sphere(self)
    }
}
