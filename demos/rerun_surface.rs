use anyhow::Result;
use covellipse::surface::{PlotSurface, Rgb, ScatterStyle};
use covellipse::utils::sample_boundary_points;
use covellipse::EllipseParams;
use rerun as rr;

/// [PlotSurface] backed by a rerun recording stream. Each surface owns its
/// own stream; nothing is kept in process-global state.
pub struct RerunSurface {
    rec: rr::RecordingStream,
    next_series: usize,
}

impl RerunSurface {
    pub fn spawn(application_id: &str) -> Result<Self> {
        let rec = rr::RecordingStreamBuilder::new(application_id.to_owned()).spawn()?;
        Ok(Self {
            rec,
            next_series: 0,
        })
    }

    fn series_path(&mut self, kind: &str, label: Option<&str>) -> String {
        let idx = self.next_series;
        self.next_series += 1;
        match label {
            Some(label) => format!("plot/{kind}_{idx}_{label}"),
            None => format!("plot/{kind}_{idx}"),
        }
    }
}

impl PlotSurface for RerunSurface {
    type F = f32;

    fn add_scatter(&mut self, x: &[f32], y: &[f32], style: &ScatterStyle) -> Result<()> {
        let path = self.series_path("scatter", style.label.as_deref());
        let points: Vec<(f32, f32)> = x.iter().copied().zip(y.iter().copied()).collect();

        let mut scatter = rr::Points2D::new(points)
            .with_colors([rr::Color::from_rgb(
                style.color[0],
                style.color[1],
                style.color[2],
            )])
            .with_radii([style.size]);
        if let Some(label) = &style.label {
            scatter = scatter.with_labels(vec![label.clone(); x.len()]);
        }

        self.rec.log(path, &scatter)?;
        Ok(())
    }

    fn add_curve(&mut self, x: &[f32], y: &[f32]) -> Result<()> {
        let path = self.series_path("curve", None);
        let strip: Vec<[f32; 2]> = x
            .iter()
            .copied()
            .zip(y.iter().copied())
            .map(|(px, py)| [px, py])
            .collect();

        self.rec.log(path, &rr::LineStrips2D::new([strip]))?;
        Ok(())
    }

    fn set_title(&mut self, text: &str) -> Result<()> {
        self.rec.log("plot/title", &rr::TextDocument::new(text))?;
        Ok(())
    }

    fn set_xlabel(&mut self, text: &str) -> Result<()> {
        self.rec.log("plot/xlabel", &rr::TextDocument::new(text))?;
        Ok(())
    }

    fn set_ylabel(&mut self, text: &str) -> Result<()> {
        self.rec.log("plot/ylabel", &rr::TextDocument::new(text))?;
        Ok(())
    }

    fn add_ellipse_patch(&mut self, params: &EllipseParams<f32>, color: Rgb) -> Result<()> {
        let path = self.series_path("ellipse", None);

        // Fill-none outline, closed by repeating the first boundary point
        let mut strip: Vec<[f32; 2]> = sample_boundary_points(params, 100)
            .into_iter()
            .map(|(px, py)| [px, py])
            .collect();
        if let Some(&first) = strip.first() {
            strip.push(first);
        }

        self.rec.log(
            path,
            &rr::LineStrips2D::new([strip])
                .with_colors([rr::Color::from_rgb(color[0], color[1], color[2])]),
        )?;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        // The spawned viewer renders as entities are logged.
        self.rec.flush_blocking();
        Ok(())
    }
}
