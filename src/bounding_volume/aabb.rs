//! Axis Aligned Bounding Box.

use crate::bounding_volume::bounding_volume_split::{
    element_centroids, split_along_axes, world_axes_by_decreasing,
};
use crate::bounding_volume::{BoundingSphere, BoundingVolume, VolumeRef};
use crate::math::{Point, Real, Vector};
use crate::query::{Line, Ray};
use crate::shape::{Boundable, Plane};
use crate::utils;

/// An Axis-Aligned Bounding Box.
///
/// The box is described by its two extremal corners `mins` and `maxs`, plus a margin added
/// to each of its half-widths by every query.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bvtree3d::bounding_volume::{Aabb, BoundingVolume};
/// use nalgebra::{Point3, Vector3};
///
/// let aabb = Aabb::new(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0), 0.5);
///
/// assert_eq!(aabb.center(), Point3::origin());
/// assert_eq!(aabb.half_widths(), Vector3::new(1.0, 2.0, 3.0));
/// assert!(aabb.intersects_point(&Point3::new(1.4, 0.0, 0.0)));
/// assert!(!aabb.intersects_point(&Point3::new(1.6, 0.0, 0.0)));
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
    /// The margin added to each half-width by queries.
    pub margin: Real,
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    ///   * `margin` - the margin added to each half-width.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>, margin: Real) -> Aabb {
        Aabb { mins, maxs, margin }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::max_values` and `maxs`
    /// components set to `-Real::max_values`.
    ///
    /// Enlarging it with `update_point` makes it exactly enclose the added points.
    #[inline]
    pub fn new_invalid(margin: Real) -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
            margin,
        )
    }

    /// Creates a new `Aabb` from its center and its half-widths.
    #[inline]
    pub fn from_half_widths(center: Point<Real>, half_widths: Vector<Real>, margin: Real) -> Self {
        Self::new(center - half_widths, center + half_widths, margin)
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-widths of this `Aabb`, ignoring its margin.
    #[inline]
    pub fn half_widths(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The corner with minimum coordinates of this `Aabb` inflated by its margin.
    #[inline]
    pub fn inflated_mins(&self) -> Point<Real> {
        self.mins - Vector::repeat(self.margin)
    }

    /// The corner with maximum coordinates of this `Aabb` inflated by its margin.
    #[inline]
    pub fn inflated_maxs(&self) -> Point<Real> {
        self.maxs + Vector::repeat(self.margin)
    }

    /// Computes the vertices of this `Aabb`, ignoring its margin.
    #[inline]
    pub fn corners(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// Does this (inflated) `Aabb` intersect `other` (inflated by its own margin)?
    #[inline]
    pub fn intersects_aabb(&self, other: &Aabb) -> bool {
        let margin = Vector::repeat(self.margin + other.margin);
        na::partial_le(&(self.mins - margin), &other.maxs)
            && na::partial_ge(&(self.maxs + margin), &other.mins)
    }

    /// Clips the parametric line `origin + dir * t`, `t ∈ [tmin, tmax]`, against this
    /// (inflated) `Aabb`.
    ///
    /// Returns the parameter range of the part of the line inside of the box. A zero
    /// component of `dir` reduces to a containment test along that axis.
    pub fn clip_line_parameters(
        &self,
        origin: &Point<Real>,
        dir: &Vector<Real>,
        mut tmin: Real,
        mut tmax: Real,
    ) -> Option<(Real, Real)> {
        let mins = self.inflated_mins();
        let maxs = self.inflated_maxs();

        for i in 0..3 {
            if dir[i] == 0.0 {
                if origin[i] < mins[i] || origin[i] > maxs[i] {
                    return None;
                }
            } else {
                let denom = 1.0 / dir[i];
                let mut inter_with_near_plane = (mins[i] - origin[i]) * denom;
                let mut inter_with_far_plane = (maxs[i] - origin[i]) * denom;

                if inter_with_near_plane > inter_with_far_plane {
                    core::mem::swap(&mut inter_with_near_plane, &mut inter_with_far_plane)
                }

                tmin = tmin.max(inter_with_near_plane);
                tmax = tmax.min(inter_with_far_plane);

                if tmin > tmax {
                    return None;
                }
            }
        }

        Some((tmin, tmax))
    }

    /// The closest point to `pt` of this (inflated) `Aabb`.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt.sup(&self.inflated_mins()).inf(&self.inflated_maxs())
    }
}

impl BoundingVolume for Aabb {
    fn empty(margin: Real) -> Self {
        Aabb::new(Point::origin(), Point::origin(), margin)
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
        self.center()
    }

    #[inline]
    fn intersects_point(&self, pt: &Point<Real>) -> bool {
        na::partial_le(&self.inflated_mins(), pt) && na::partial_ge(&self.inflated_maxs(), pt)
    }

    #[inline]
    fn intersects_sphere(&self, center: &Point<Real>, radius: Real) -> bool {
        na::distance_squared(&self.project_point(center), center) <= radius * radius
    }

    fn intersects_line(&self, line: &Line) -> bool {
        self.clip_line_parameters(&line.point, &line.dir, -Real::MAX, Real::MAX)
            .is_some()
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        self.clip_line_parameters(&ray.origin, &ray.dir, 0.0, Real::MAX)
            .is_some()
    }

    fn intersects_plane(&self, plane: &Plane) -> bool {
        let half_widths = self.half_widths().add_scalar(self.margin);
        let projected_radius = half_widths.dot(&plane.normal.abs());
        plane.signed_distance(&self.center()).abs() <= projected_radius
    }

    fn distance_to_point(&self, pt: &Point<Real>) -> (Real, Point<Real>) {
        let proj = self.project_point(pt);
        (na::distance(pt, &proj), proj)
    }

    fn distance_to_point_along(&self, pt: &Point<Real>, dir: &Vector<Real>) -> (Real, Point<Real>) {
        match self.clip_line_parameters(pt, dir, 0.0, Real::MAX) {
            Some((tmin, _)) => (tmin * dir.norm(), pt + dir * tmin),
            None => (Real::INFINITY, *pt),
        }
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        let radius = self.half_widths().add_scalar(self.margin).norm();
        BoundingSphere::new(self.center(), radius, 0.0)
    }

    fn update_point(&mut self, pt: &Point<Real>) -> bool {
        if na::partial_le(&self.mins, pt) && na::partial_ge(&self.maxs, pt) {
            false
        } else {
            self.mins = self.mins.inf(pt);
            self.maxs = self.maxs.sup(pt);
            true
        }
    }

    fn update_sphere(&mut self, center: &Point<Real>, radius: Real) -> bool {
        let radius = Vector::repeat(radius);
        let mins = center - radius;
        let maxs = center + radius;

        if na::partial_le(&self.mins, &mins) && na::partial_ge(&self.maxs, &maxs) {
            false
        } else {
            self.mins = self.mins.inf(&mins);
            self.maxs = self.maxs.sup(&maxs);
            true
        }
    }

    #[inline]
    fn contains(&self, other: &Self) -> bool {
        na::partial_le(&self.inflated_mins(), &other.inflated_mins())
            && na::partial_ge(&self.inflated_maxs(), &other.inflated_maxs())
    }

    fn enclose(&mut self, other: &Self) -> bool {
        if na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs) {
            false
        } else {
            self.mins = self.mins.inf(&other.mins);
            self.maxs = self.maxs.sup(&other.maxs);
            true
        }
    }

    fn bound<B: Boundable>(&mut self, elements: &[B]) {
        let center = utils::boundables_center(elements);
        self.mins = center;
        self.maxs = center;

        for element in elements {
            let _ = element.update_bv(self);
        }
    }

    fn bound_children(&mut self, a: &Self, b: &Self) {
        self.mins = a.mins.inf(&b.mins);
        self.maxs = a.maxs.sup(&b.maxs);
    }

    fn split<B: Boundable>(&self, elements: &mut Vec<B>) -> Option<Vec<B>> {
        if elements.len() < 2 {
            return None;
        }

        let centroids = element_centroids(elements);
        let axes = world_axes_by_decreasing(&self.half_widths());
        split_along_axes(elements, &centroids, &axes)
    }

    #[inline]
    fn as_volume_ref(&self) -> VolumeRef<'_> {
        VolumeRef::Aabb(self)
    }
}
