use nalgebra as na;
use simba::scalar::SupersetOf;
use thiserror::Error;

use crate::math::eig::symmetric_eigen_2x2;
use crate::sample::{SampleError, SamplePair};

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] SampleError),

    #[error("Confidence scale must be positive, got {0}")]
    NonPositiveScale(f64),

    #[error("Distribution is degenerate: zero variance in every direction")]
    DegenerateDistribution,
}

/// A covariance-based confidence region as an ellipse patch: center, full
/// extents along the principal axes, and the rotation of the major axis.
///
/// Produced fresh by [confidence_ellipse]; carries no reference back to the
/// sample it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseParams<F: na::RealField + Copy> {
    center_x: F,
    center_y: F,
    width: F,
    height: F,
    rotation_angle: F,
}

impl<F: na::RealField + Copy> EllipseParams<F> {
    pub fn center(&self) -> (F, F) {
        (self.center_x, self.center_y)
    }

    /// Full extent along the major principal axis.
    pub fn width(&self) -> F {
        self.width
    }

    /// Full extent along the minor principal axis.
    pub fn height(&self) -> F {
        self.height
    }

    /// Rotation of the major axis in radians from the positive x-axis.
    pub fn rotation(&self) -> F {
        self.rotation_angle
    }

    pub fn semi_major(&self) -> F {
        let two = F::from_usize(2)
            .expect("Could not initialize 2.0 scalar. Check if usize is supported.");
        self.width / two
    }

    pub fn semi_minor(&self) -> F {
        let two = F::from_usize(2)
            .expect("Could not initialize 2.0 scalar. Check if usize is supported.");
        self.height / two
    }
}

/// Computes the confidence ellipse of a validated sample.
///
/// The covariance matrix of the sample is decomposed into its principal axes;
/// the ellipse spans `2 * scale * sqrt(lambda)` along each axis and is
/// centered on the sample mean. `scale` is conventionally a number of
/// standard deviations.
///
/// A single zero eigenvalue (perfectly correlated data) is valid and yields a
/// zero-height ellipse. When both eigenvalues are numerically zero there is no
/// principal axis to orient the patch by, and drawing a zero-area ellipse
/// would misrepresent the data, so [EstimatorError::DegenerateDistribution]
/// is returned instead.
pub fn confidence_ellipse<F: na::RealField + Copy>(
    sample: &SamplePair<F>,
    scale: F,
) -> Result<EllipseParams<F>, EstimatorError> {
    if scale <= F::zero() {
        return Err(EstimatorError::NonPositiveScale(scale.to_subset_unchecked()));
    }

    let cov = sample.covariance();
    let eig = symmetric_eigen_2x2(&cov);

    let tolerance = F::default_epsilon() * (F::one() + cov.trace().abs());
    if eig.lambda_major <= tolerance {
        return Err(EstimatorError::DegenerateDistribution);
    }

    // Rounding can push the smaller eigenvalue of a rank-one covariance
    // slightly below zero.
    let lambda_minor = eig.lambda_minor.max(F::zero());

    let two = F::from_usize(2)
        .expect("Could not initialize 2.0 scalar. Check if usize is supported.");
    let (center_x, center_y) = sample.mean();

    Ok(EllipseParams {
        center_x,
        center_y,
        width: two * scale * eig.lambda_major.sqrt(),
        height: two * scale * lambda_minor.sqrt(),
        rotation_angle: eig.angle,
    })
}

/// Convenience entry point over raw slices; validates and computes in one
/// call.
pub fn compute<F: na::RealField + Copy>(
    x: &[F],
    y: &[F],
    scale: F,
) -> Result<EllipseParams<F>, EstimatorError> {
    let sample = SamplePair::from_slices(x, y)?;
    confidence_ellipse(&sample, scale)
}
