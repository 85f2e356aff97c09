use itertools::izip;
use nalgebra as na;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Sample sequences must have equal length, got x={0}, y={1}")]
    LengthMismatch(usize, usize),

    #[error("At least 2 paired observations are required, got {0}")]
    TooFewObservations(usize),
}

/// Paired observations (x_i, y_i) of equal length N >= 2.
///
/// Immutable once constructed; the validity checks run once here so the
/// estimator can assume well-formed input.
#[derive(Debug, Clone)]
pub struct SamplePair<F: na::RealField + Copy> {
    x: Vec<F>,
    y: Vec<F>,
}

impl<F: na::RealField + Copy> SamplePair<F> {
    pub fn new(x: Vec<F>, y: Vec<F>) -> Result<Self, SampleError> {
        if x.len() != y.len() {
            return Err(SampleError::LengthMismatch(x.len(), y.len()));
        }
        if x.len() < 2 {
            return Err(SampleError::TooFewObservations(x.len()));
        }
        Ok(Self { x, y })
    }

    pub fn from_slices(x: &[F], y: &[F]) -> Result<Self, SampleError> {
        Self::new(x.to_vec(), y.to_vec())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        // Never true: construction requires N >= 2
        self.x.is_empty()
    }

    pub fn x(&self) -> &[F] {
        &self.x
    }

    pub fn y(&self) -> &[F] {
        &self.y
    }

    /// Component-wise sample mean.
    pub fn mean(&self) -> (F, F) {
        let n = F::from_usize(self.len())
            .expect("Could not initialize scalar from sample length.");
        let mut sum_x = F::zero();
        let mut sum_y = F::zero();
        for (&xi, &yi) in izip!(&self.x, &self.y) {
            sum_x += xi;
            sum_y += yi;
        }
        (sum_x / n, sum_y / n)
    }

    /// Unbiased 2x2 sample covariance matrix (divides by N - 1).
    pub fn covariance(&self) -> na::Matrix2<F> {
        let (mean_x, mean_y) = self.mean();
        let mut s_xx = F::zero();
        let mut s_xy = F::zero();
        let mut s_yy = F::zero();
        for (&xi, &yi) in izip!(&self.x, &self.y) {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            s_xx += dx * dx;
            s_xy += dx * dy;
            s_yy += dy * dy;
        }
        let denom = F::from_usize(self.len() - 1)
            .expect("Could not initialize scalar from sample length.");
        na::Matrix2::new(s_xx / denom, s_xy / denom, s_xy / denom, s_yy / denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_mismatch() {
        let result = SamplePair::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]);
        assert!(matches!(result, Err(SampleError::LengthMismatch(3, 2))));
    }

    #[test]
    fn test_too_few_observations() {
        let result = SamplePair::new(vec![1.0], vec![1.0]);
        assert!(matches!(result, Err(SampleError::TooFewObservations(1))));

        let result = SamplePair::<f64>::new(vec![], vec![]);
        assert!(matches!(result, Err(SampleError::TooFewObservations(0))));
    }

    #[test]
    fn test_mean() {
        let sample = SamplePair::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![2.0, 2.0, 2.0, 2.0, 2.0])
            .unwrap();
        let (mx, my) = sample.mean();
        assert_relative_eq!(mx, 2.0);
        assert_relative_eq!(my, 2.0);
    }

    #[test]
    fn test_covariance_known_values() {
        // Var([0..4]) with the unbiased estimator is 2.5
        let sample =
            SamplePair::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        let cov = sample.covariance();

        assert_relative_eq!(cov[(0, 0)], 2.5, epsilon = 1e-12);
        assert_relative_eq!(cov[(1, 1)], 2.5, epsilon = 1e-12);
        assert_relative_eq!(cov[(0, 1)], 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_covariance_symmetric() {
        let sample =
            SamplePair::new(vec![1.0, 3.0, 5.0, 7.0], vec![2.0, 4.0, 1.0, 3.0]).unwrap();
        let cov = sample.covariance();
        assert_relative_eq!(cov[(0, 1)], cov[(1, 0)], epsilon = 1e-12);
    }

    #[test]
    fn test_covariance_independent_components() {
        // y fluctuates opposite in sign but orthogonal in pattern to x
        let sample =
            SamplePair::new(vec![-1.0, 1.0, -1.0, 1.0], vec![-1.0, -1.0, 1.0, 1.0]).unwrap();
        let cov = sample.covariance();
        assert_relative_eq!(cov[(0, 1)], 0.0, epsilon = 1e-12);
        assert!(cov[(0, 0)] > 0.0);
        assert!(cov[(1, 1)] > 0.0);
    }

    #[test]
    fn test_covariance_f32() {
        let sample = SamplePair::new(vec![0.0f32, 1.0, 2.0], vec![0.0f32, 1.0, 2.0]).unwrap();
        let cov = sample.covariance();
        assert_relative_eq!(cov[(0, 0)], 1.0f32, epsilon = 1e-6);
    }
}
