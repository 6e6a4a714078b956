//! # Spectral domain
//! Wavenumbers and spectral operators of the doubly periodic square.
//!
//! Spectral arrays are centered: the zero wavenumber sits at index
//! `n/2` along each axis. Axis 1 is x (wavenumber k), axis 0 is y
//! (wavenumber l).
use crate::bases::{fftshift, ifftshift, Base, Transform};
use ndarray::prelude::*;
use num_complex::Complex;
use std::f64::consts::PI;

/// Hyperviscosity of the del4 damping, chosen such that
/// the damping timescale at wavenumber `floor(n/3)` is `tau`
#[allow(clippy::cast_precision_loss)]
pub fn hyperviscosity(n: usize, domain: f64, tau: f64) -> f64 {
    let kcut = (n / 3) as f64 * 2. * PI;
    (domain / kcut).powi(4) / tau
}

/// Spectral space of a square, periodic domain
///
/// Holds wavenumber meshes, derived operators and the
/// transform, which is planned once at construction.
pub struct Space2 {
    /// Number of grid points along each axis
    pub n: usize,
    /// Side length
    pub domain: f64,
    /// Grid spacing
    pub dx: f64,
    /// Wavenumbers in x
    pub k: Array1<f64>,
    /// Wavenumbers in y
    pub l: Array1<f64>,
    /// Mesh of k, kk\[\[i, j\]\] = k\[j\]
    pub kk: Array2<f64>,
    /// Mesh of l, ll\[\[i, j\]\] = l\[i\]
    pub ll: Array2<f64>,
    /// k^2 + l^2, set to 1 at the zero wavenumber
    pub ksq: Array2<f64>,
    /// 1 / ksq
    pub rksq: Array2<f64>,
    /// i*kk
    pub ik: Array2<Complex<f64>>,
    /// i*ll
    pub il: Array2<Complex<f64>>,
    /// Transform
    base: Base,
}

impl Space2 {
    /// Return new space
    ///
    /// ## Panics
    /// Size of `base` differs from `n`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(n: usize, domain: f64, base: Base) -> Self {
        assert!(base.size() == n, "Transform size does not match grid.");
        let dk = 2. * PI / domain;
        let k: Array1<f64> =
            Array1::from_iter((0..n).map(|i| (i as f64 - (n / 2) as f64) * dk));
        let l = k.clone();
        let kk = Array2::from_shape_fn((n, n), |(_, j)| k[j]);
        let ll = Array2::from_shape_fn((n, n), |(i, _)| l[i]);
        let mut ksq = &kk * &kk + &ll * &ll;
        // avoid divide by zero, the mean streamfunction is arbitrary
        ksq.mapv_inplace(|x| if x == 0. { 1. } else { x });
        let rksq = ksq.mapv(|x| 1. / x);
        let ik = kk.mapv(|x| Complex::new(0., x));
        let il = ll.mapv(|x| Complex::new(0., x));
        Self {
            n,
            domain,
            dx: domain / n as f64,
            k,
            l,
            kk,
            ll,
            ksq,
            rksq,
            ik,
            il,
            base,
        }
    }

    /// Wavenumber spacing 2 pi / domain
    pub fn dk(&self) -> f64 {
        2. * PI / self.domain
    }

    /// Shape of physical and spectral arrays
    pub fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    /// Physical to (centered) spectral space
    pub fn ft(&mut self, phi: &Array2<Complex<f64>>) -> Array2<Complex<f64>> {
        let mut phit = Array2::zeros(self.shape());
        self.base.forward(phi, &mut phit);
        fftshift(&phit)
    }

    /// (Centered) spectral to physical space
    pub fn ift(&mut self, psi: &Array2<Complex<f64>>) -> Array2<Complex<f64>> {
        let mut phi = Array2::zeros(self.shape());
        self.base.backward(&ifftshift(psi), &mut phi);
        phi
    }

    /// Scale selective damping 1 / (1 + nu ksq^2 dt)
    pub fn dissipation(&self, nu: f64, dt: f64) -> Array2<f64> {
        self.ksq.mapv(|x| 1. / (1. + nu * x * x * dt))
    }

    /// Wavenumbers at and above this magnitude are removed from the
    /// nonlinear term
    pub fn k_max(&self, aa_fac: f64) -> f64 {
        aa_fac * 2. * self.dk()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bases::{dft, fourier};

    fn approx_eq(result: &Array2<Complex<f64>>, expected: &Array2<Complex<f64>>, tol: f64) {
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).norm() > tol {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    fn test_wavenumbers() {
        let n = 8;
        let space = Space2::new(n, 1.0, fourier(n));
        let dk = 2. * PI;
        assert!((space.k[0] + 4. * dk).abs() < 1e-12);
        assert!((space.k[n - 1] - 3. * dk).abs() < 1e-12);
        assert!(space.k[n / 2].abs() < 1e-12);
        assert!((space.kk[[0, 1]] - space.k[1]).abs() < 1e-12);
        assert!((space.ll[[1, 0]] - space.l[1]).abs() < 1e-12);
        assert!((space.dx - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_zero_mode_safe() {
        let n = 16;
        let space = Space2::new(n, 2.0, fourier(n));
        let zeros = space
            .kk
            .iter()
            .zip(space.ll.iter())
            .filter(|(k, l)| **k == 0. && **l == 0.)
            .count();
        assert_eq!(zeros, 1);
        assert!((space.ksq[[n / 2, n / 2]] - 1.).abs() < 1e-12);
        assert!(space.ksq.iter().all(|x| *x > 0.));
        assert!(space.rksq.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_roundtrip() {
        let n = 16;
        for base in vec![fourier(n), dft(n)] {
            let mut space = Space2::new(n, 1.0, base);
            let field = Array2::from_shape_fn((n, n), |(i, j)| {
                Complex::new((i as f64 * 0.3).sin() + j as f64, (j as f64 * 0.7).cos())
            });
            let spec = space.ft(&field);
            let back = space.ift(&spec);
            approx_eq(&back, &field, 1e-10);
        }
    }

    #[test]
    fn test_centered_mode() {
        // cos(2 pi x) lives at k = +-dk, i.e. indices n/2 +- 1 on axis 1
        let n = 8;
        let mut space = Space2::new(n, 1.0, fourier(n));
        let field = Array2::from_shape_fn((n, n), |(_, j)| {
            Complex::new((2. * PI * j as f64 / n as f64).cos(), 0.)
        });
        let spec = space.ft(&field);
        let amp = (n * n) as f64 / 2.;
        assert!((spec[[n / 2, n / 2 + 1]].re - amp).abs() < 1e-9);
        assert!((spec[[n / 2, n / 2 - 1]].re - amp).abs() < 1e-9);
        assert!(spec[[n / 2, n / 2]].norm() < 1e-9);
    }

    #[test]
    fn test_dissipation() {
        let n = 12;
        let space = Space2::new(n, 1.0, fourier(n));
        let nu = hyperviscosity(n, 1.0, 0.1);
        let del4 = space.dissipation(nu, 0.01);
        assert!(del4.iter().all(|x| *x <= 1. && *x > 0.));
        // stronger at larger wavenumbers
        assert!(del4[[0, 0]] < del4[[n / 2, n / 2 + 1]]);
        // damping timescale at k = 2 pi floor(n/3) is tau
        let kcut = 2. * PI * 4.;
        assert!((nu * kcut.powi(4) - 1. / 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_k_max() {
        let n = 12;
        let space = Space2::new(n, 1.0, fourier(n));
        let k_max = space.k_max(n as f64 / 6.);
        assert!((k_max - 4. * 2. * PI).abs() < 1e-12);
    }
}
