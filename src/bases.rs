//! # Bases
//! Transforms between physical and spectral space on the doubly
//! periodic square.
//!
//! Implemented:
//! - Fourier (planned fft)
//! - Dft (dense matrix dft, reference)
//!
//! Both use the same convention: unnormalized forward transform,
//! inverse transform normalized by `1/n` along each axis. Spectral
//! arrays handed to the rest of the crate are centered with
//! [`fftshift`], see [`crate::Space2::ft`].
pub mod dft;
pub mod fourier;
pub use dft::Dft;
pub use fourier::Fourier;
use crate::params::Backend;
use enum_dispatch::enum_dispatch;
use ndarray::Array2;
use num_complex::Complex;

/// Two dimensional complex to complex transform of
/// square arrays with a fixed size.
#[enum_dispatch]
pub trait Transform {
    /// Number of grid points along each axis
    fn size(&self) -> usize;

    /// Transform array from physical to spectral space
    fn forward(&mut self, input: &Array2<Complex<f64>>, output: &mut Array2<Complex<f64>>);

    /// Transform array from spectral to physical space
    fn backward(&mut self, input: &Array2<Complex<f64>>, output: &mut Array2<Complex<f64>>);
}

/// Enum of all implemented transforms.
///
/// Selected once at setup, all variants must give the same
/// result up to rounding.
#[enum_dispatch(Transform)]
pub enum Base {
    /// Planned fft
    Fourier(Fourier),
    /// Dense matrix dft
    Dft(Dft),
}

/// Function to return `Fourier`
#[must_use]
pub fn fourier(n: usize) -> Base {
    Base::Fourier(Fourier::new(n))
}

/// Function to return `Dft`
#[must_use]
pub fn dft(n: usize) -> Base {
    Base::Dft(Dft::new(n))
}

impl Base {
    /// Return base for backend
    #[must_use]
    pub fn from_backend(backend: Backend, n: usize) -> Self {
        match backend {
            Backend::Fft => fourier(n),
            Backend::Dft => dft(n),
        }
    }
}

/// Shift zero-frequency bin to the center of the array
pub fn fftshift<T: Copy>(input: &Array2<T>) -> Array2<T> {
    let (nrows, ncols) = input.dim();
    roll(input, nrows / 2, ncols / 2)
}

/// Inverse of [`fftshift`]
pub fn ifftshift<T: Copy>(input: &Array2<T>) -> Array2<T> {
    let (nrows, ncols) = input.dim();
    roll(input, nrows - nrows / 2, ncols - ncols / 2)
}

/// Periodic shift of both axes, out\[(i+s0)%n0, (j+s1)%n1\] = in\[i, j\]
fn roll<T: Copy>(input: &Array2<T>, s0: usize, s1: usize) -> Array2<T> {
    let (nrows, ncols) = input.dim();
    Array2::from_shape_fn((nrows, ncols), |(i, j)| {
        input[[(i + nrows - s0) % nrows, (j + ncols - s1) % ncols]]
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fftshift_even() {
        let a = array![[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]];
        let expected = array![[10, 11, 8, 9], [14, 15, 12, 13], [2, 3, 0, 1], [6, 7, 4, 5]];
        assert_eq!(fftshift(&a), expected);
        assert_eq!(ifftshift(&fftshift(&a)), a);
    }

    #[test]
    fn test_fftshift_odd() {
        // numpy.fft.fftshift(np.arange(9).reshape(3, 3))
        let a = array![[0, 1, 2], [3, 4, 5], [6, 7, 8]];
        let expected = array![[8, 6, 7], [2, 0, 1], [5, 3, 4]];
        assert_eq!(fftshift(&a), expected);
        assert_eq!(ifftshift(&fftshift(&a)), a);
    }

    #[test]
    fn test_backends_agree() {
        let n = 8;
        let input = Array2::from_shape_fn((n, n), |(i, j)| {
            Complex::new((i * n + j) as f64, (i as f64 - j as f64) * 0.5)
        });
        let mut fft = fourier(n);
        let mut reference = dft(n);
        let mut a = Array2::zeros((n, n));
        let mut b = Array2::zeros((n, n));
        fft.forward(&input, &mut a);
        reference.forward(&input, &mut b);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).norm() < 1e-9, "fft {} vs dft {}", x, y);
        }
        fft.backward(&a, &mut b);
        for (x, y) in b.iter().zip(input.iter()) {
            assert!((x - y).norm() < 1e-10, "roundtrip {} vs {}", x, y);
        }
    }
}
