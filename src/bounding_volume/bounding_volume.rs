use crate::bounding_volume::{Aabb, BoundingSphere, Obb};
use crate::math::{Point, Real, Vector};
use crate::query::{self, Line, Ray};
use crate::shape::{Boundable, Plane};
use std::fmt::Debug;

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of a set of [`Boundable`]s with cheap
/// intersection tests. Each volume carries a non-negative margin: every query and distance
/// treats the volume as if it was inflated by this margin, while fitting operations
/// (`update_point`, `update_sphere`, `bound`, `bound_children`) only grow the bare volume.
pub trait BoundingVolume: Clone + Debug {
    /// A degenerate volume located at the origin, with the given margin.
    fn empty(margin: Real) -> Self;

    /// The margin this volume is inflated by.
    fn margin(&self) -> Real;

    /// Sets the margin this volume is inflated by.
    fn set_margin(&mut self, margin: Real);

    /// A copy of this volume with its margin increased by `amount`.
    fn loosened(&self, amount: Real) -> Self {
        let mut result = self.clone();
        result.set_margin(self.margin() + amount);
        result
    }

    /// The center of this bounding volume.
    fn center(&self) -> Point<Real>;

    /// Does this (inflated) volume contain `pt`?
    fn intersects_point(&self, pt: &Point<Real>) -> bool;

    /// Does this (inflated) volume intersect the ball with the given center and radius?
    fn intersects_sphere(&self, center: &Point<Real>, radius: Real) -> bool;

    /// Does this (inflated) volume intersect the infinite line?
    fn intersects_line(&self, line: &Line) -> bool;

    /// Does this (inflated) volume intersect the ray?
    fn intersects_ray(&self, ray: &Ray) -> bool;

    /// Does this (inflated) volume touch or straddle the plane?
    fn intersects_plane(&self, plane: &Plane) -> bool;

    /// Does this (inflated) volume intersect `other` (inflated by its own margin)?
    ///
    /// This works for any pair of volume kinds.
    #[inline]
    fn intersects<V: BoundingVolume>(&self, other: &V) -> bool {
        query::intersection_test(self.as_volume_ref(), other.as_volume_ref())
    }

    /// The distance from `pt` to this (inflated) volume, and the point of the volume closest
    /// to `pt`.
    ///
    /// The distance is zero if `pt` lies inside of the volume.
    fn distance_to_point(&self, pt: &Point<Real>) -> (Real, Point<Real>);

    /// The distance from `pt` to the first point of this (inflated) volume reached when moving
    /// from `pt` along `dir`, and that point.
    ///
    /// The distance is measured in world units, not in multiples of `dir`. It is
    /// `Real::INFINITY` if the volume can't be reached along `dir`. With a zero `dir`, the
    /// distance is zero if `pt` lies inside of the volume, and infinite otherwise.
    fn distance_to_point_along(&self, pt: &Point<Real>, dir: &Vector<Real>) -> (Real, Point<Real>);

    /// A sphere enclosing this (inflated) volume. The returned sphere has a zero margin.
    fn bounding_sphere(&self) -> BoundingSphere;

    /// Enlarges this volume so it contains `pt`.
    ///
    /// Returns `true` if this volume had to be modified.
    fn update_point(&mut self, pt: &Point<Real>) -> bool;

    /// Enlarges this volume so it contains the ball with the given center and radius.
    ///
    /// Returns `true` if this volume had to be modified.
    fn update_sphere(&mut self, center: &Point<Real>, radius: Real) -> bool;

    /// Does this (inflated) volume contain `other` (inflated by its own margin)?
    fn contains(&self, other: &Self) -> bool;

    /// Enlarges this volume so it contains `other`, both being inflated by their margins.
    ///
    /// Both volumes are expected to have the same margin. Returns `true` if this volume had
    /// to be modified.
    fn enclose(&mut self, other: &Self) -> bool;

    /// Fits this volume to the given elements. The margin is left unchanged.
    fn bound<B: Boundable>(&mut self, elements: &[B]);

    /// Fits this volume to the union of two volumes of the same kind, so it contains both.
    /// The margin is left unchanged.
    fn bound_children(&mut self, a: &Self, b: &Self);

    /// Splits `elements` into two non-empty groups.
    ///
    /// On success, `elements` is left with the first group and the second group is returned.
    /// Returns `None`, leaving `elements` unchanged, if there are less than two elements or
    /// if no candidate axis separates them.
    fn split<B: Boundable>(&self, elements: &mut Vec<B>) -> Option<Vec<B>>;

    /// A tagged reference to this volume, used for pairwise dispatch.
    fn as_volume_ref(&self) -> VolumeRef<'_>;
}

/// A reference to one of the supported bounding volumes.
#[derive(Copy, Clone, Debug)]
pub enum VolumeRef<'a> {
    /// A bounding sphere.
    Sphere(&'a BoundingSphere),
    /// An axis-aligned bounding box.
    Aabb(&'a Aabb),
    /// An oriented bounding box.
    Obb(&'a Obb),
}

impl<'a> VolumeRef<'a> {
    /// The margin of the referenced volume.
    pub fn margin(self) -> Real {
        match self {
            VolumeRef::Sphere(s) => s.margin(),
            VolumeRef::Aabb(b) => b.margin(),
            VolumeRef::Obb(b) => b.margin(),
        }
    }

    /// A sphere enclosing the referenced volume.
    pub fn bounding_sphere(self) -> BoundingSphere {
        match self {
            VolumeRef::Sphere(s) => s.bounding_sphere(),
            VolumeRef::Aabb(b) => b.bounding_sphere(),
            VolumeRef::Obb(b) => b.bounding_sphere(),
        }
    }
}
