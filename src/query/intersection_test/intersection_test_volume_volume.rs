use crate::bounding_volume::{BoundingVolume, Obb, VolumeRef};
use crate::query::sat;

/// Tests whether two bounding volumes of any kind intersect.
///
/// Both volumes are inflated by their own margin. Every ordered pair of volume kinds is
/// handled explicitly.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume};
/// use bvtree3d::query;
/// use nalgebra::{Point3, Vector3};
///
/// let sphere = BoundingSphere::new(Point3::new(2.0, 0.0, 0.0), 0.5, 0.0);
/// let aabb = Aabb::from_half_widths(Point3::origin(), Vector3::repeat(1.0), 0.0);
///
/// assert!(!query::intersection_test(sphere.as_volume_ref(), aabb.as_volume_ref()));
/// assert!(query::intersection_test(sphere.as_volume_ref(), aabb.loosened(0.5).as_volume_ref()));
/// # }
/// ```
pub fn intersection_test_volume_volume(bv1: VolumeRef, bv2: VolumeRef) -> bool {
    match (bv1, bv2) {
        (VolumeRef::Sphere(s1), VolumeRef::Sphere(s2)) => {
            s1.intersects_sphere(&s2.center, s2.radius + s2.margin)
        }
        (VolumeRef::Sphere(s1), VolumeRef::Aabb(b2)) => {
            b2.intersects_sphere(&s1.center, s1.radius + s1.margin)
        }
        (VolumeRef::Sphere(s1), VolumeRef::Obb(b2)) => {
            b2.intersects_sphere(&s1.center, s1.radius + s1.margin)
        }
        (VolumeRef::Aabb(b1), VolumeRef::Sphere(s2)) => {
            b1.intersects_sphere(&s2.center, s2.radius + s2.margin)
        }
        (VolumeRef::Aabb(b1), VolumeRef::Aabb(b2)) => b1.intersects_aabb(b2),
        (VolumeRef::Aabb(b1), VolumeRef::Obb(b2)) => {
            !sat::obb_obb_separated(&Obb::from_aabb(b1), b2)
        }
        (VolumeRef::Obb(b1), VolumeRef::Sphere(s2)) => {
            b1.intersects_sphere(&s2.center, s2.radius + s2.margin)
        }
        (VolumeRef::Obb(b1), VolumeRef::Aabb(b2)) => {
            !sat::obb_obb_separated(b1, &Obb::from_aabb(b2))
        }
        (VolumeRef::Obb(b1), VolumeRef::Obb(b2)) => !sat::obb_obb_separated(b1, b2),
    }
}
