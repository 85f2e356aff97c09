mod rerun_surface;

use anyhow::Result;
use covellipse::PlotSurface;
use rerun_surface::RerunSurface;

fn main() -> Result<()> {
    let mut surface = RerunSurface::spawn("sine_wave")?;

    let n = 100;
    let x: Vec<f32> = (0..n).map(|i| 10.0 * i as f32 / (n - 1) as f32).collect();
    let y: Vec<f32> = x.iter().map(|v| v.sin()).collect();

    surface.add_curve(&x, &y)?;
    surface.set_title("Sine wave")?;
    surface.set_xlabel("X")?;
    surface.set_ylabel("Y")?;
    surface.show()?;

    Ok(())
}
