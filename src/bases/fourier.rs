//! # Fourier
//! Fast complex to complex transform, planned once for the grid
//! size and reused for every call.
use super::Transform;
use ndarray::Array2;
use ndrustfft::{ndfft, ndifft, FftHandler};
use num_complex::Complex;

/// Planned fft along both axes of a square array
pub struct Fourier {
    /// Number of points along each axis
    n: usize,
    /// Plan, valid for both axes
    handler: FftHandler<f64>,
    /// Intermediate result after the first axis
    buffer: Array2<Complex<f64>>,
}

impl Fourier {
    /// Plan transform for (n, n) arrays
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            n,
            handler: FftHandler::new(n),
            buffer: Array2::zeros((n, n)),
        }
    }
}

impl Transform for Fourier {
    fn size(&self) -> usize {
        self.n
    }

    fn forward(&mut self, input: &Array2<Complex<f64>>, output: &mut Array2<Complex<f64>>) {
        ndfft(input, &mut self.buffer, &mut self.handler, 1);
        ndfft(&self.buffer, output, &mut self.handler, 0);
    }

    fn backward(&mut self, input: &Array2<Complex<f64>>, output: &mut Array2<Complex<f64>>) {
        ndifft(input, &mut self.buffer, &mut self.handler, 0);
        ndifft(&self.buffer, output, &mut self.handler, 1);
    }
}
