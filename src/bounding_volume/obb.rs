//! Oriented Bounding Box.

use crate::bounding_volume::bounding_volume_split::{element_centroids, split_along_axes};
use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, VolumeRef};
use crate::math::{Isometry, Matrix, Point, Real, Rotation, Vector};
use crate::query::{Line, Ray};
use crate::shape::{Boundable, Plane};
use crate::utils;
use std::cmp::Ordering;

/// An Oriented Bounding Box.
///
/// The box is stored as a rotation together with the axis-aligned box of its content
/// expressed in the rotated frame, i.e., a point `x` of the world is inside of the box if
/// `rotation⁻¹ * x` is inside of [`Obb::local_aabb`]. The margin is the one of the local box.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bvtree3d::bounding_volume::{BoundingVolume, Obb};
/// use nalgebra::{Point3, Rotation3, Vector3};
///
/// let a = Obb::new(Point3::origin(), Rotation3::identity(), Vector3::repeat(1.0), 0.0);
/// let b = Obb::new(Point3::new(3.0, 0.0, 0.0), Rotation3::identity(), Vector3::repeat(1.0), 0.0);
/// let c = Obb::new(Point3::new(1.5, 0.0, 0.0), Rotation3::identity(), Vector3::repeat(1.0), 0.0);
///
/// assert!(!a.intersects(&b));
/// assert!(a.intersects(&c));
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    rotation: Rotation<Real>,
    local_aabb: Aabb,
}

impl Obb {
    /// Creates a new oriented box from its center, orientation, half-widths and margin.
    pub fn new(
        center: Point<Real>,
        rotation: Rotation<Real>,
        half_widths: Vector<Real>,
        margin: Real,
    ) -> Obb {
        let local_center = rotation.inverse_transform_point(&center);
        Obb {
            rotation,
            local_aabb: Aabb::from_half_widths(local_center, half_widths, margin),
        }
    }

    /// Creates an oriented box with the same extents and margin as `aabb`, and the identity
    /// rotation.
    pub fn from_aabb(aabb: &Aabb) -> Obb {
        Obb {
            rotation: Rotation::identity(),
            local_aabb: *aabb,
        }
    }

    /// Creates an oriented box centered at the translation of `pos` and oriented by its
    /// rotation.
    pub fn from_isometry(pos: &Isometry<Real>, half_widths: Vector<Real>, margin: Real) -> Obb {
        Obb::new(
            pos.translation.vector.into(),
            pos.rotation.to_rotation_matrix(),
            half_widths,
            margin,
        )
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.rotation * self.local_aabb.center()
    }

    /// The orientation of this box.
    #[inline]
    pub fn rotation(&self) -> &Rotation<Real> {
        &self.rotation
    }

    /// The half-widths of this box along its local axes, ignoring its margin.
    #[inline]
    pub fn half_widths(&self) -> Vector<Real> {
        self.local_aabb.half_widths()
    }

    /// The axis-aligned box of the content of this box, in the rotated frame.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// The `i`-th local axis of this box, in world-space.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.rotation.matrix().column(i).into_owned()
    }

    /// Computes the vertices of this box in world-space, ignoring its margin.
    pub fn corners(&self) -> [Point<Real>; 8] {
        self.local_aabb.corners().map(|pt| self.rotation * pt)
    }

    /// Computes the vertices of this box inflated by its margin, in world-space.
    pub fn inflated_corners(&self) -> [Point<Real>; 8] {
        let inflated = Aabb::new(
            self.local_aabb.inflated_mins(),
            self.local_aabb.inflated_maxs(),
            0.0,
        );
        inflated.corners().map(|pt| self.rotation * pt)
    }

    /// Resets the orientation of this box and makes it enclose the given points.
    fn fit_points<'a>(
        &mut self,
        rotation: Rotation<Real>,
        pts: impl IntoIterator<Item = &'a Point<Real>>,
    ) {
        let margin = self.local_aabb.margin;
        self.rotation = rotation;
        self.local_aabb = Aabb::new_invalid(margin);

        for pt in pts {
            let _ = self.update_point(pt);
        }
    }

    /// The principal axes of the given covariance matrix, by decreasing variance, forming a
    /// right-handed frame.
    fn principal_axes(cov: Matrix<Real>) -> Rotation<Real> {
        let eigen = cov.symmetric_eigen();
        let mut ids = [0, 1, 2];
        ids.sort_by(|a, b| {
            eigen.eigenvalues[*b]
                .partial_cmp(&eigen.eigenvalues[*a])
                .unwrap_or(Ordering::Equal)
        });

        let mut axes = Matrix::from_columns(&[
            eigen.eigenvectors.column(ids[0]).into_owned(),
            eigen.eigenvectors.column(ids[1]).into_owned(),
            eigen.eigenvectors.column(ids[2]).into_owned(),
        ]);

        if axes.determinant() < 0.0 {
            let flipped = -axes.column(2);
            axes.set_column(2, &flipped);
        }

        Rotation::from_matrix_unchecked(axes)
    }
}

impl BoundingVolume for Obb {
    fn empty(margin: Real) -> Self {
        Obb::from_aabb(&Aabb::empty(margin))
    }

    #[inline]
    fn margin(&self) -> Real {
        self.local_aabb.margin
    }

    #[inline]
    fn set_margin(&mut self, margin: Real) {
        self.local_aabb.margin = margin;
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects_point(&self, pt: &Point<Real>) -> bool {
        self.local_aabb
            .intersects_point(&self.rotation.inverse_transform_point(pt))
    }

    #[inline]
    fn intersects_sphere(&self, center: &Point<Real>, radius: Real) -> bool {
        self.local_aabb
            .intersects_sphere(&self.rotation.inverse_transform_point(center), radius)
    }

    fn intersects_line(&self, line: &Line) -> bool {
        self.local_aabb
            .intersects_line(&line.inverse_rotated(&self.rotation))
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        self.local_aabb
            .intersects_ray(&ray.inverse_rotated(&self.rotation))
    }

    fn intersects_plane(&self, plane: &Plane) -> bool {
        self.local_aabb
            .intersects_plane(&plane.inverse_rotated(&self.rotation))
    }

    fn distance_to_point(&self, pt: &Point<Real>) -> (Real, Point<Real>) {
        let local_pt = self.rotation.inverse_transform_point(pt);
        let (dist, local_proj) = self.local_aabb.distance_to_point(&local_pt);
        (dist, self.rotation * local_proj)
    }

    fn distance_to_point_along(&self, pt: &Point<Real>, dir: &Vector<Real>) -> (Real, Point<Real>) {
        let local_pt = self.rotation.inverse_transform_point(pt);
        let local_dir = self.rotation.inverse_transform_vector(dir);

        match self
            .local_aabb
            .clip_line_parameters(&local_pt, &local_dir, 0.0, Real::MAX)
        {
            Some((tmin, _)) => (tmin * dir.norm(), pt + dir * tmin),
            None => (Real::INFINITY, *pt),
        }
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        let radius = self.half_widths().add_scalar(self.margin()).norm();
        BoundingSphere::new(self.center(), radius, 0.0)
    }

    #[inline]
    fn update_point(&mut self, pt: &Point<Real>) -> bool {
        let local_pt = self.rotation.inverse_transform_point(pt);
        self.local_aabb.update_point(&local_pt)
    }

    #[inline]
    fn update_sphere(&mut self, center: &Point<Real>, radius: Real) -> bool {
        let local_center = self.rotation.inverse_transform_point(center);
        self.local_aabb.update_sphere(&local_center, radius)
    }

    fn contains(&self, other: &Self) -> bool {
        other
            .inflated_corners()
            .iter()
            .all(|pt| self.intersects_point(pt))
    }

    /// Enlarges this box, keeping its orientation, so its bare extents already contain the
    /// inflated `other`. The margins of both boxes being equal, the inflated `other` then
    /// stays inside of the inflated `self` whatever their relative orientation.
    fn enclose(&mut self, other: &Self) -> bool {
        let mut changed = false;

        for pt in &other.inflated_corners() {
            changed = self.update_point(pt) || changed;
        }

        changed
    }

    fn bound<B: Boundable>(&mut self, elements: &[B]) {
        let center = utils::boundables_center(elements);
        let cov = utils::boundables_cov(elements, &center);
        let rotation = Self::principal_axes(cov);

        self.fit_points(rotation, [center].iter());

        for element in elements {
            let _ = element.update_bv(self);
        }
    }

    fn bound_children(&mut self, a: &Self, b: &Self) {
        let corners_a = a.inflated_corners();
        let corners_b = b.inflated_corners();
        self.fit_points(self.rotation, corners_a.iter().chain(corners_b.iter()));
    }

    fn split<B: Boundable>(&self, elements: &mut Vec<B>) -> Option<Vec<B>> {
        if elements.len() < 2 {
            return None;
        }

        let centroids = element_centroids(elements);
        let axes = [self.axis(0), self.axis(1), self.axis(2)];
        split_along_axes(elements, &centroids, &axes)
    }

    #[inline]
    fn as_volume_ref(&self) -> VolumeRef<'_> {
        VolumeRef::Obb(self)
    }
}
