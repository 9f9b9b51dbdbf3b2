use super::point_set::{
    points_centroid, points_covariance, points_distance, points_distance_along, points_update_bv,
};
use crate::bounding_volume::BoundingVolume;
use crate::math::{Matrix, Point, Real, Vector};
use crate::shape::Boundable;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// A point buffer shared between several [`SharedPointSet`].
pub type SharedPoints = Arc<RwLock<Vec<Point<Real>>>>;

/// A set of points bounded as a single element, referencing points of a shared buffer.
///
/// Several sets may reference the same buffer entries. Moving a buffer entry moves it in every
/// set referencing it; trees containing these sets must then be refitted. Indices past the end
/// of the buffer are ignored.
#[derive(Clone, Debug)]
pub struct SharedPointSet {
    index: usize,
    buffer: SharedPoints,
    indices: Vec<usize>,
}

impl SharedPointSet {
    /// An empty set referencing `buffer`, with the given user index.
    pub fn new(buffer: SharedPoints, index: usize) -> Self {
        Self {
            index,
            buffer,
            indices: Vec::new(),
        }
    }

    /// A set referencing the entries `indices` of `buffer`, with the given user index.
    pub fn with_points(buffer: SharedPoints, indices: Vec<usize>, index: usize) -> Self {
        Self {
            index,
            buffer,
            indices,
        }
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

    /// The buffer this set references.
    #[inline]
    pub fn buffer(&self) -> &SharedPoints {
        &self.buffer
    }

    /// The indices of the buffer entries referenced by this set.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Replaces all the buffer entries referenced by this set.
    pub fn set_points(&mut self, indices: Vec<usize>) {
        self.indices = indices;
    }

    /// References one more buffer entry.
    pub fn add_point(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// A copy of the points currently referenced by this set.
    pub fn points(&self) -> Vec<Point<Real>> {
        let buffer = self.read_buffer();
        self.indices
            .iter()
            .filter_map(|i| buffer.get(*i).copied())
            .collect()
    }

    fn read_buffer(&self) -> RwLockReadGuard<'_, Vec<Point<Real>>> {
        self.buffer.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Boundable for SharedPointSet {
    fn centroid(&self) -> Point<Real> {
        let buffer = self.read_buffer();
        points_centroid(self.indices.iter().filter_map(|i| buffer.get(*i)))
    }

    fn covariance(&self, center: &Point<Real>) -> Matrix<Real> {
        let buffer = self.read_buffer();
        points_covariance(self.indices.iter().filter_map(|i| buffer.get(*i)), center)
    }

    fn update_bv<V: BoundingVolume>(&self, bv: &mut V) -> bool {
        let buffer = self.read_buffer();
        points_update_bv(self.indices.iter().filter_map(|i| buffer.get(*i)), bv)
    }

    fn distance_to_point(&self, pt: &Point<Real>) -> (Real, Point<Real>) {
        let buffer = self.read_buffer();
        points_distance(self.indices.iter().filter_map(|i| buffer.get(*i)), pt)
    }

    fn distance_to_point_along(&self, pt: &Point<Real>, dir: &Vector<Real>) -> (Real, Point<Real>) {
        let buffer = self.read_buffer();
        points_distance_along(self.indices.iter().filter_map(|i| buffer.get(*i)), pt, dir)
    }
}
