//! # Dft
//! Dense matrix discrete fourier transform.
//!
//! Portable and simple, but O(n^3). Serves as reference for
//! faster backends.
use super::Transform;
use ndarray::Array2;
use num_complex::Complex;
use std::f64::consts::PI;

/// Matrix dft of a square array
pub struct Dft {
    /// Number of points along each axis
    n: usize,
    /// Forward matrix exp(-2 pi i jk/n)
    fwd: Array2<Complex<f64>>,
    /// Backward matrix exp(2 pi i jk/n) / n
    bwd: Array2<Complex<f64>>,
}

impl Dft {
    /// Assemble transform matrices for (n, n) arrays
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(n: usize) -> Self {
        let fwd = Array2::from_shape_fn((n, n), |(j, k)| {
            let arg = -2. * PI * ((j * k) % n) as f64 / n as f64;
            Complex::from_polar(1.0, arg)
        });
        let norm = 1. / n as f64;
        let bwd = fwd.mapv(|w| w.conj() * norm);
        Self { n, fwd, bwd }
    }
}

impl Transform for Dft {
    fn size(&self) -> usize {
        self.n
    }

    /// Both matrices are symmetric, W x W transforms both axes
    fn forward(&mut self, input: &Array2<Complex<f64>>, output: &mut Array2<Complex<f64>>) {
        output.assign(&self.fwd.dot(input).dot(&self.fwd));
    }

    fn backward(&mut self, input: &Array2<Complex<f64>>, output: &mut Array2<Complex<f64>>) {
        output.assign(&self.bwd.dot(input).dot(&self.bwd));
    }
}
