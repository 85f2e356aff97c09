mod rerun_surface;

use anyhow::{Context, Result};
use covellipse::estimator::EstimatorError;
use covellipse::surface::{Rgb, ScatterStyle};
use covellipse::{draw_confidence_ellipse, Error, PlotSurface, SamplePair};
use rerun_surface::RerunSurface;
use serde::Deserialize;

/// One row of the features table: two log-likelihood scores and a class
/// index.
#[derive(Debug, Deserialize)]
struct FeatureRow {
    positive: f32,
    negative: f32,
    sentiment: usize,
}

/// Display policy for one class, supplied here rather than baked into the
/// library.
struct ClassStyle {
    label: &'static str,
    color: Rgb,
}

const PALETTE: [ClassStyle; 2] = [
    ClassStyle {
        label: "negative",
        color: [255, 0, 0],
    },
    ClassStyle {
        label: "positive",
        color: [0, 170, 0],
    },
];

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/data/features.csv".to_owned());

    let mut reader = csv::Reader::from_path(&path)
        .with_context(|| format!("Failed to open feature table at {path}"))?;

    // Bucket rows per class index
    let mut classes: Vec<(Vec<f32>, Vec<f32>)> = (0..PALETTE.len()).map(|_| Default::default()).collect();
    for row in reader.deserialize() {
        let row: FeatureRow = row.context("Malformed feature row")?;
        let class = classes
            .get_mut(row.sentiment)
            .with_context(|| format!("Class index {} has no palette entry", row.sentiment))?;
        class.0.push(row.positive);
        class.1.push(row.negative);
    }

    let mut surface = RerunSurface::spawn("bayes_features")?;
    surface.set_title("Tweet sentiment features")?;
    surface.set_xlabel("Positive")?;
    surface.set_ylabel("Negative")?;

    for (style, (x, y)) in PALETTE.iter().zip(&classes) {
        surface.add_scatter(
            x,
            y,
            &ScatterStyle {
                color: style.color,
                size: 0.5,
                label: Some(style.label.to_owned()),
            },
        )?;

        // Two-standard-deviation region per class; a class whose points carry
        // no spread simply gets no ellipse.
        let sample = match SamplePair::from_slices(x, y) {
            Ok(sample) => sample,
            Err(err) => {
                eprintln!("skipping ellipse for '{}': {err}", style.label);
                continue;
            }
        };
        match draw_confidence_ellipse(&mut surface, &sample, 2.0, style.color) {
            Ok(()) => {}
            Err(Error::Estimator(EstimatorError::DegenerateDistribution)) => {
                eprintln!("skipping ellipse for '{}': degenerate distribution", style.label);
            }
            Err(err) => return Err(err.into()),
        }
    }

    surface.show()?;
    Ok(())
}
