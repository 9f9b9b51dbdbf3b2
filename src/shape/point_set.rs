use crate::bounding_volume::BoundingVolume;
use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Boundable;
use num::Zero;

/// A set of points bounded as a single element, stored by value.
///
/// Points are owned by the set so they cannot be shared with other sets. See
/// [`SharedPointSet`](crate::shape::SharedPointSet) for sets referencing a common buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    index: usize,
    points: Vec<Point<Real>>,
}

impl PointSet {
    /// An empty point set with the given user index.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            points: Vec::new(),
        }
    }

    /// A point set with the given points and user index.
    pub fn with_points(points: Vec<Point<Real>>, index: usize) -> Self {
        Self { index, points }
    }

    /// The user index of this set.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sets the user index of this set.
    #[inline]
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// The points of this set.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Mutable access to the points of this set.
    ///
    /// If this set is stored in a tree, the tree's bounding volumes must be refitted after
    /// the points moved.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [Point<Real>] {
        &mut self.points
    }

    /// Replaces all the points of this set.
    pub fn set_points(&mut self, points: Vec<Point<Real>>) {
        self.points = points;
    }

    /// Adds a point to this set.
    pub fn add_point(&mut self, point: Point<Real>) {
        self.points.push(point);
    }
}

impl Boundable for PointSet {
    fn centroid(&self) -> Point<Real> {
        points_centroid(self.points.iter())
    }

    fn covariance(&self, center: &Point<Real>) -> Matrix<Real> {
        points_covariance(self.points.iter(), center)
    }

    fn update_bv<V: BoundingVolume>(&self, bv: &mut V) -> bool {
        points_update_bv(self.points.iter(), bv)
    }

    fn distance_to_point(&self, pt: &Point<Real>) -> (Real, Point<Real>) {
        points_distance(self.points.iter(), pt)
    }

    fn distance_to_point_along(&self, pt: &Point<Real>, dir: &Vector<Real>) -> (Real, Point<Real>) {
        points_distance_along(self.points.iter(), pt, dir)
    }
}

pub(crate) fn points_centroid<'a>(pts: impl Iterator<Item = &'a Point<Real>>) -> Point<Real> {
    let mut sum = Vector::zeros();
    let mut count = 0usize;

    for pt in pts {
        sum += pt.coords;
        count += 1;
    }

    if count == 0 {
        Point::origin()
    } else {
        Point::from(sum / (count as Real))
    }
}

pub(crate) fn points_covariance<'a>(
    pts: impl Iterator<Item = &'a Point<Real>>,
    center: &Point<Real>,
) -> Matrix<Real> {
    let mut cov = Matrix::zeros();
    for pt in pts {
        let cp = pt - center;
        cov += cp * cp.transpose();
    }
    cov
}

pub(crate) fn points_update_bv<'a, V: BoundingVolume>(
    pts: impl Iterator<Item = &'a Point<Real>>,
    bv: &mut V,
) -> bool {
    let mut updated = false;
    for pt in pts {
        updated |= bv.update_point(pt);
    }
    updated
}

pub(crate) fn points_distance<'a>(
    pts: impl Iterator<Item = &'a Point<Real>>,
    query: &Point<Real>,
) -> (Real, Point<Real>) {
    let mut best = (Real::INFINITY, *query);

    for pt in pts {
        let dist = na::distance(pt, query);
        if dist < best.0 {
            best = (dist, *pt);
        }
    }

    best
}

pub(crate) fn points_distance_along<'a>(
    pts: impl Iterator<Item = &'a Point<Real>>,
    query: &Point<Real>,
    dir: &Vector<Real>,
) -> (Real, Point<Real>) {
    let mut best = (Real::INFINITY, *query);

    for pt in pts {
        if let Some(dist) = distance_along_ray(query, dir, pt) {
            if dist < best.0 {
                best = (dist, *pt);
            }
        }
    }

    best
}

/// The distance from `origin` to `pt` if `pt` lies on the ray `origin + t * dir`, `t >= 0`.
///
/// A zero `dir` only reaches `origin` itself.
pub(crate) fn distance_along_ray(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    pt: &Point<Real>,
) -> Option<Real> {
    let v = pt - origin;
    let dist = v.norm();
    let dir_sq = dir.norm_squared();

    if dir_sq.is_zero() {
        return dist.is_zero().then_some(dist);
    }

    let t = v.dot(dir) / dir_sq;
    if t < 0.0 {
        return None;
    }

    let perp = v - dir * t;
    let tolerance = DEFAULT_EPSILON * 8.0 * dist.max(1.0);
    (perp.norm() <= tolerance).then_some(dist)
}
