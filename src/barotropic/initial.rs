//! # Initial conditions
//! Named functions which fill the vorticity field at t = 0.
//!
//! ```
//! use barovort::barotropic::initial::Registry;
//! use ndarray::Array2;
//! let registry = Registry::default();
//! let spot = registry.get("spot").unwrap();
//! let mut z = Array2::zeros((16, 16));
//! spot(&mut z);
//! assert!(z.iter().any(|x| x.re > 0.));
//! ```
use crate::error::{Error, Result};
use ndarray::{Array2, Zip};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use num_complex::Complex;
use std::collections::HashMap;
use std::f64::consts::PI;

/// Fills a square vorticity field in place
pub type InitialCondition = fn(&mut Array2<Complex<f64>>);

/// Lookup table from name to initial condition
pub struct Registry {
    conditions: HashMap<String, InitialCondition>,
}

impl Registry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: HashMap::new(),
        }
    }

    /// Add (or replace) initial condition
    pub fn register(&mut self, name: &str, ic: InitialCondition) {
        self.conditions.insert(name.to_string(), ic);
    }

    /// Return initial condition
    ///
    /// # Errors
    /// No initial condition registered under `name`
    pub fn get(&self, name: &str) -> Result<InitialCondition> {
        self.conditions
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownInitialCondition(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.conditions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    /// Registry with `spot` and `random`
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("spot", spot);
        registry.register("random", random);
        registry
    }
}

/// Single spot of max value 2.0 in the lower half of the plane
#[allow(clippy::cast_precision_loss)]
pub fn spot(z: &mut Array2<Complex<f64>>) {
    let d = (z.shape()[0] / 4) as f64;
    for ((i, j), v) in z.indexed_iter_mut() {
        let dist = ((d - i as f64).powi(2) + (2. * d - j as f64).powi(2)).sqrt();
        if dist < d {
            let amp = 2.0 * (0.5 * PI * (d - dist) / d + 0.5 * PI).cos().powi(2);
            *v = Complex::new(amp, 0.);
        }
    }
}

/// Uniform noise in \[-1, 1)
pub fn random(z: &mut Array2<Complex<f64>>) {
    let noise = Array2::random(z.raw_dim(), Uniform::new(-1., 1.));
    Zip::from(z)
        .and(&noise)
        .for_each(|v, &r| *v = Complex::new(r, 0.));
}
