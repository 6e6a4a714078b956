//! # Field operators
//! Spectral derivatives, velocity reconstruction, enstrophy
//! and anti-aliasing on the centered spectral grid of [`Space2`].
use crate::space::Space2;
use ndarray::{Array2, ArrayBase, DataMut, Ix2, Zip};
use num_complex::Complex;
use num_traits::Zero;

/// Field in physical space (v) and spectral space (vhat)
///
/// ```
/// use barovort::{fourier, Field2, Space2};
/// let mut space = Space2::new(8, 1.0, fourier(8));
/// let mut field = Field2::new(&space);
/// field.v[[1, 2]].re = 1.0;
/// field.forward(&mut space);
/// field.backward(&mut space);
/// assert!((field.v[[1, 2]].re - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct Field2 {
    /// Field in physical space
    pub v: Array2<Complex<f64>>,
    /// Field in spectral space
    pub vhat: Array2<Complex<f64>>,
}

impl Field2 {
    /// Zero field with the shape of space
    #[must_use]
    pub fn new(space: &Space2) -> Self {
        Self {
            v: Array2::zeros(space.shape()),
            vhat: Array2::zeros(space.shape()),
        }
    }

    /// Transform v -> vhat
    pub fn forward(&mut self, space: &mut Space2) {
        self.vhat = space.ft(&self.v);
    }

    /// Transform vhat -> v
    pub fn backward(&mut self, space: &mut Space2) {
        self.v = space.ift(&self.vhat);
    }

    /// Spectral derivatives (d/dx, d/dy) of vhat
    pub fn gradient(&self, space: &Space2) -> (Array2<Complex<f64>>, Array2<Complex<f64>>) {
        gradient(space, &self.vhat)
    }
}

/// Returns (ik F\[phi\], il F\[phi\]), the spectral x and y derivatives
pub fn gradient(
    space: &Space2,
    phit: &Array2<Complex<f64>>,
) -> (Array2<Complex<f64>>, Array2<Complex<f64>>) {
    (&space.ik * phit, &space.il * phit)
}

/// Returns the velocity field (u, v) = (dpsi/dy, -dpsi/dx)
/// in physical space from F\[psi\]
pub fn velocity(
    space: &mut Space2,
    psit: &Array2<Complex<f64>>,
) -> (Array2<Complex<f64>>, Array2<Complex<f64>>) {
    let (psixt, psiyt) = gradient(space, psit);
    let psix = space.ift(&psixt);
    let psiy = space.ift(&psiyt);
    (psiy, -psix)
}

/// Enstrophy per mode, 0.5 |F\[zeta\]|^2
pub fn enstrophy(zt: &Array2<Complex<f64>>) -> Array2<f64> {
    zt.mapv(|z| 0.5 * (z * z.conj()).re)
}

/// Zero all coefficients with |k| >= k_max or |l| >= k_max
pub fn dealias<S>(phit: &mut ArrayBase<S, Ix2>, space: &Space2, k_max: f64)
where
    S: DataMut<Elem = Complex<f64>>,
{
    Zip::from(phit)
        .and(&space.kk)
        .and(&space.ll)
        .for_each(|p, &k, &l| {
            if k.abs() >= k_max || l.abs() >= k_max {
                *p = Complex::zero();
            }
        });
}
