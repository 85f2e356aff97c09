use nalgebra as na;

use crate::estimator::EllipseParams;

/// Helper function to create points along an ellipse boundary for backends
/// that draw patches as polylines.
///
/// Points are returned in parameter order over a full revolution; the first
/// point is not repeated at the end, so close the strip on the rendering side
/// if the backend needs it.
pub fn sample_boundary_points<F: na::RealField + Copy>(
    params: &EllipseParams<F>,
    num_points: usize,
) -> Vec<(F, F)> {
    let mut points = Vec::with_capacity(num_points);

    let (cx, cy) = params.center();
    let a = params.semi_major();
    let b = params.semi_minor();
    let (sin_rot, cos_rot) = params.rotation().sin_cos();

    for i in 0..num_points {
        let t = F::from_f64(i as f64 * 2.0 / num_points as f64)
            .expect("Could not initialize scalar from f64.")
            * F::pi();
        let (sin_t, cos_t) = t.sin_cos();

        // Point on the axis-aligned ellipse, rotated then translated
        let u = a * cos_t;
        let v = b * sin_t;
        let x = cx + u * cos_rot - v * sin_rot;
        let y = cy + u * sin_rot + v * cos_rot;
        points.push((x, y));
    }

    points
}
