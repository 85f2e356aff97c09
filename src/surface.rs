use nalgebra as na;

use crate::estimator::{confidence_ellipse, EllipseParams};
use crate::sample::SamplePair;

/// RGB edge/marker color.
pub type Rgb = [u8; 3];

/// Marker styling for a scatter series. Colors and labels are supplied by the
/// caller; nothing here is tied to any particular class scheme.
#[derive(Debug, Clone)]
pub struct ScatterStyle {
    pub color: Rgb,
    pub size: f32,
    pub label: Option<String>,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            size: 1.0,
            label: None,
        }
    }
}

/// A 2D plot surface owned by the caller.
///
/// This is the seam to the rendering backend; implementations hold whatever
/// handle their backend needs (a recording stream, a drawing area) instead of
/// mutating a process-global figure. The estimator itself only ever calls
/// [PlotSurface::add_ellipse_patch].
pub trait PlotSurface {
    type F: na::RealField + Copy;

    fn add_scatter(
        &mut self,
        x: &[Self::F],
        y: &[Self::F],
        style: &ScatterStyle,
    ) -> anyhow::Result<()>;

    fn add_curve(&mut self, x: &[Self::F], y: &[Self::F]) -> anyhow::Result<()>;

    fn set_title(&mut self, text: &str) -> anyhow::Result<()>;

    fn set_xlabel(&mut self, text: &str) -> anyhow::Result<()>;

    fn set_ylabel(&mut self, text: &str) -> anyhow::Result<()>;

    /// Draws an unfilled ellipse outline with the given edge color.
    fn add_ellipse_patch(
        &mut self,
        params: &EllipseParams<Self::F>,
        color: Rgb,
    ) -> anyhow::Result<()>;

    fn show(&mut self) -> anyhow::Result<()>;
}

/// Computes the confidence ellipse of `sample` and draws it onto `surface`.
///
/// Estimator errors are surfaced as-is; no fallback ellipse is drawn for
/// degenerate input, the caller decides whether to skip or abort.
pub fn draw_confidence_ellipse<S: PlotSurface>(
    surface: &mut S,
    sample: &SamplePair<S::F>,
    scale: S::F,
    color: Rgb,
) -> Result<(), crate::Error> {
    let params = confidence_ellipse(sample, scale)?;
    surface.add_ellipse_patch(&params, color)?;
    Ok(())
}
