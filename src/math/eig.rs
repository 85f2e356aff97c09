use nalgebra as na;

/// Eigen-decomposition of a symmetric 2x2 matrix, eigenvalues in descending
/// order. `angle` is the direction of the major eigenvector, measured in
/// radians from the positive x-axis and normalized into (-pi/2, pi/2]; the
/// eigenvector is only defined up to sign, so a half-turn covers every
/// direction.
#[derive(Debug, Clone, Copy)]
pub struct SymmetricEigen2<F> {
    pub lambda_major: F,
    pub lambda_minor: F,
    pub angle: F,
}

/// Closed-form eigen-decomposition of a symmetric 2x2 matrix.
///
/// The problem size is fixed, so this avoids an iterative general-purpose
/// decomposition. Only the upper triangle is read; the matrix is assumed
/// symmetric.
///
/// For `[[a, b], [b, c]]` the eigenvalues are `(a + c)/2 ± r` with
/// `r = sqrt(((a - c)/2)^2 + b^2)`, and `(b, lambda_major - a)` is an
/// eigenvector of the larger one whenever `b != 0`.
pub fn symmetric_eigen_2x2<F: na::RealField + Copy>(m: &na::Matrix2<F>) -> SymmetricEigen2<F> {
    let two = F::from_usize(2)
        .expect("Could not initialize 2.0 scalar. Check if usize is supported.");

    let a = m[(0, 0)];
    let b = m[(0, 1)];
    let c = m[(1, 1)];

    let half_trace = (a + c) / two;
    let half_diff = (a - c) / two;
    let radius = (half_diff * half_diff + b * b).sqrt();

    let lambda_major = half_trace + radius;
    let lambda_minor = half_trace - radius;

    let angle = if b == F::zero() {
        // Already diagonal; the major axis is whichever coordinate axis
        // carries the larger eigenvalue.
        if a >= c {
            F::zero()
        } else {
            F::frac_pi_2()
        }
    } else {
        // (b, lambda_major - a) has a non-negative y-component, so atan2
        // lands in [0, pi]; fold the upper quadrant back down.
        let raw = (lambda_major - a).atan2(b);
        if raw > F::frac_pi_2() {
            raw - F::pi()
        } else {
            raw
        }
    };

    SymmetricEigen2 {
        lambda_major,
        lambda_minor,
        angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_diagonal_matrix() {
        let m = na::Matrix2::new(3.0, 0.0, 0.0, 1.0);
        let eig = symmetric_eigen_2x2(&m);

        assert_relative_eq!(eig.lambda_major, 3.0, epsilon = 1e-12);
        assert_relative_eq!(eig.lambda_minor, 1.0, epsilon = 1e-12);
        assert_relative_eq!(eig.angle, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diagonal_matrix_major_on_y() {
        let m = na::Matrix2::new(1.0, 0.0, 0.0, 4.0);
        let eig = symmetric_eigen_2x2(&m);

        assert_relative_eq!(eig.lambda_major, 4.0, epsilon = 1e-12);
        assert_relative_eq!(eig.lambda_minor, 1.0, epsilon = 1e-12);
        assert_relative_eq!(eig.angle, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_is_isotropic() {
        let eig = symmetric_eigen_2x2(&na::Matrix2::<f64>::identity());
        assert_relative_eq!(eig.lambda_major, eig.lambda_minor, epsilon = 1e-12);
    }

    #[test]
    fn test_rank_one_matrix() {
        // [[1, 1], [1, 1]] has eigenvalues 2 and 0, major axis at 45 degrees
        let m = na::Matrix2::new(1.0, 1.0, 1.0, 1.0);
        let eig = symmetric_eigen_2x2(&m);

        assert_relative_eq!(eig.lambda_major, 2.0, epsilon = 1e-12);
        assert_relative_eq!(eig.lambda_minor, 0.0, epsilon = 1e-12);
        assert_relative_eq!(eig.angle, PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eigenvector_direction() {
        let test_angles = vec![PI / 6.0, PI / 4.0, PI / 3.0, -PI / 8.0];

        for &theta in &test_angles {
            // Build R(theta) * diag(4, 1) * R(theta)^T and recover theta
            let rot = na::Rotation2::new(theta);
            let m = rot.matrix() * na::Matrix2::new(4.0, 0.0, 0.0, 1.0) * rot.matrix().transpose();
            let eig = symmetric_eigen_2x2(&m);

            assert_relative_eq!(eig.lambda_major, 4.0, epsilon = 1e-10);
            assert_relative_eq!(eig.lambda_minor, 1.0, epsilon = 1e-10);
            assert_relative_eq!(eig.angle, theta, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_ordering() {
        let m = na::Matrix2::new(1.0, -2.0, -2.0, 3.0);
        let eig = symmetric_eigen_2x2(&m);
        assert!(eig.lambda_major >= eig.lambda_minor);

        // Eigenvalues satisfy the characteristic equation
        for lambda in [eig.lambda_major, eig.lambda_minor] {
            let det = (1.0 - lambda) * (3.0 - lambda) - 4.0;
            assert_relative_eq!(det, 0.0, epsilon = 1e-10);
        }
    }
}
