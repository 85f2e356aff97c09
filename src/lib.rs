mod error;
pub mod estimator;
pub mod math;
pub mod sample;
pub mod surface;
pub mod utils;

pub use error::Error;
pub use estimator::{compute, confidence_ellipse, EllipseParams};
pub use sample::SamplePair;
pub use surface::{draw_confidence_ellipse, PlotSurface};
