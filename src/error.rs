use crate::estimator::EstimatorError;
use crate::sample::SampleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Estimator(#[from] EstimatorError),

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error("Unknown error: {0}")]
    Unknown(#[from] anyhow::Error),
}
