use crate::math::{Matrix, Point, Real};
use crate::shape::Boundable;

/// Computes the (unnormalized) covariance matrix of a set of boundables about `center`.
///
/// This is the sum of [`Boundable::covariance`] over every element. Only the principal
/// directions of this matrix are meaningful to the callers, so no normalization is applied.
pub fn boundables_cov<B: Boundable>(elements: &[B], center: &Point<Real>) -> Matrix<Real> {
    elements
        .iter()
        .fold(Matrix::zeros(), |acc, elt| acc + elt.covariance(center))
}
