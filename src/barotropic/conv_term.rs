//! # Nonlinear advection term
use ndarray::{Array2, Zip};
use num_complex::Complex;

/// Jacobian in physical space
/// $$
/// J = psi_x zeta_y - psi_y zeta_x + ubar zeta_x
/// $$
///
/// # Input
///
///   *psix, psiy*: ndarray (2D)
///        Streamfunction derivatives in physical space
///
///   *zx, zy*: ndarray (2D)
///        Vorticity derivatives in physical space
///
///   *ubar*: f64
///        Constant background zonal velocity
pub fn jacobian(
    psix: &Array2<Complex<f64>>,
    psiy: &Array2<Complex<f64>>,
    zx: &Array2<Complex<f64>>,
    zy: &Array2<Complex<f64>>,
    ubar: f64,
) -> Array2<Complex<f64>> {
    Zip::from(psix)
        .and(psiy)
        .and(zx)
        .and(zy)
        .map_collect(|&px, &py, &zx, &zy| px * zy - py * zx + zx * ubar)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bases::fourier;
    use crate::field::gradient;
    use crate::space::Space2;
    use std::f64::consts::PI;

    fn approx_eq(result: &Array2<Complex<f64>>, expected: &Array2<Complex<f64>>) {
        let dif = 1e-8;
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).norm() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    fn derivatives(
        space: &mut Space2,
        phi: &Array2<Complex<f64>>,
    ) -> (Array2<Complex<f64>>, Array2<Complex<f64>>) {
        let phit = space.ft(phi);
        let (xt, yt) = gradient(space, &phit);
        (space.ift(&xt), space.ift(&yt))
    }

    #[test]
    fn test_jacobian() {
        // psi = cos(2 pi x), zeta = sin(2 pi y)
        // J = -2 pi sin(2 pi x) * 2 pi cos(2 pi y) + ubar * 0
        let n = 16;
        let mut space = Space2::new(n, 1.0, fourier(n));
        let arg = |m: usize| 2. * PI * m as f64 / n as f64;
        let psi = Array2::from_shape_fn((n, n), |(_, j)| Complex::new(arg(j).cos(), 0.));
        let z = Array2::from_shape_fn((n, n), |(i, _)| Complex::new(arg(i).sin(), 0.));
        let (psix, psiy) = derivatives(&mut space, &psi);
        let (zx, zy) = derivatives(&mut space, &z);
        let jac = jacobian(&psix, &psiy, &zx, &zy, 0.5);
        let expected = Array2::from_shape_fn((n, n), |(i, j)| {
            Complex::new(-4. * PI * PI * arg(j).sin() * arg(i).cos(), 0.)
        });
        approx_eq(&jac, &expected);
    }

    #[test]
    fn test_jacobian_background_flow() {
        // zeta = sin(2 pi x), psi = 0: J = ubar * 2 pi cos(2 pi x)
        let n = 8;
        let mut space = Space2::new(n, 1.0, fourier(n));
        let arg = |m: usize| 2. * PI * m as f64 / n as f64;
        let zero = Array2::zeros((n, n));
        let z = Array2::from_shape_fn((n, n), |(_, j)| Complex::new(arg(j).sin(), 0.));
        let (zx, zy) = derivatives(&mut space, &z);
        let jac = jacobian(&zero, &zero, &zx, &zy, 0.3);
        let expected =
            Array2::from_shape_fn((n, n), |(_, j)| Complex::new(0.3 * 2. * PI * arg(j).cos(), 0.));
        approx_eq(&jac, &expected);
    }

    #[test]
    fn test_jacobian_self_advection() {
        // Vorticity proportional to streamfunction is a steady state
        let n = 16;
        let mut space = Space2::new(n, 1.0, fourier(n));
        let arg = |m: usize| 2. * PI * m as f64 / n as f64;
        let psi = Array2::from_shape_fn((n, n), |(i, j)| {
            Complex::new(arg(j).cos() * arg(i).sin(), 0.)
        });
        let z = psi.mapv(|x| x * -8. * PI * PI);
        let (psix, psiy) = derivatives(&mut space, &psi);
        let (zx, zy) = derivatives(&mut space, &z);
        let jac = jacobian(&psix, &psiy, &zx, &zy, 0.0);
        approx_eq(&jac, &Array2::zeros((n, n)));
    }
}
