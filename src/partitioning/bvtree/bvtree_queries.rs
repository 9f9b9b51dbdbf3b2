use super::{BvNode, BvTree};
use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real};
use crate::query::{Line, Ray};
use crate::shape::{Boundable, Plane};

impl<B: Boundable, V: BoundingVolume> BvTree<B, V> {
    /// Collects into `out` the leaves whose volume contains `pt`.
    ///
    /// Returns the number of leaves appended to `out`.
    pub fn intersect_point<'a>(&'a self, pt: &Point<Real>, out: &mut Vec<&'a BvNode<B, V>>) -> usize {
        self.collect_leaves(out, |node| node.bv.intersects_point(pt))
    }

    /// Collects into `out` the leaves whose volume intersects the ball with the given center
    /// and radius.
    ///
    /// Returns the number of leaves appended to `out`.
    pub fn intersect_sphere<'a>(
        &'a self,
        center: &Point<Real>,
        radius: Real,
        out: &mut Vec<&'a BvNode<B, V>>,
    ) -> usize {
        self.collect_leaves(out, |node| node.bv.intersects_sphere(center, radius))
    }

    /// Collects into `out` the leaves whose volume intersects the infinite line.
    ///
    /// Returns the number of leaves appended to `out`.
    pub fn intersect_line<'a>(&'a self, line: &Line, out: &mut Vec<&'a BvNode<B, V>>) -> usize {
        self.collect_leaves(out, |node| node.bv.intersects_line(line))
    }

    /// Collects into `out` the leaves whose volume intersects the ray.
    ///
    /// Returns the number of leaves appended to `out`.
    pub fn intersect_ray<'a>(&'a self, ray: &Ray, out: &mut Vec<&'a BvNode<B, V>>) -> usize {
        self.collect_leaves(out, |node| node.bv.intersects_ray(ray))
    }

    /// Collects into `out` the leaves whose volume touches or straddles the plane.
    ///
    /// Returns the number of leaves appended to `out`.
    pub fn intersect_plane<'a>(&'a self, plane: &Plane, out: &mut Vec<&'a BvNode<B, V>>) -> usize {
        self.collect_leaves(out, |node| node.bv.intersects_plane(plane))
    }

    /// Collects into `out` the leaves whose volume intersects `bv`, which can be of any kind.
    ///
    /// Returns the number of leaves appended to `out`.
    pub fn intersect_bv<'a, W: BoundingVolume>(
        &'a self,
        bv: &W,
        out: &mut Vec<&'a BvNode<B, V>>,
    ) -> usize {
        self.collect_leaves(out, |node| node.bv.intersects(bv))
    }

    fn collect_leaves<'a>(
        &'a self,
        out: &mut Vec<&'a BvNode<B, V>>,
        check: impl Fn(&BvNode<B, V>) -> bool,
    ) -> usize {
        let len_before = out.len();
        out.extend(self.leaves(check));
        out.len() - len_before
    }
}
