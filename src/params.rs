//! Simulation parameters
//!
//! All fields have defaults, a yaml file only needs to
//! list what differs:
//! ```yaml
//! n: 64
//! ic: random
//! allow_speedup: true
//! ```
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Transform backend used for all forward/backward transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Planned fast fourier transform
    Fft,
    /// Dense matrix dft (slow reference)
    Dft,
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Fft
    }
}

/// Parameters of the beta-plane model
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Number of grid points in x and y
    pub n: usize,
    /// Name of initial condition
    pub ic: String,
    /// Anti-alias factor, `n` disables truncation, `0` removes
    /// all nonlinear waves. Defaults to `n / 6`.
    pub aa_fac: Option<f64>,
    /// Background zonal velocity
    pub ubar: f64,
    /// Beta-plane coefficient, f = f0 + beta*y
    pub beta: f64,
    /// Dissipation timescale
    pub tau: f64,
    /// Allow larger timesteps when the Courant number is small
    pub allow_speedup: bool,
    /// Grow dt below this Courant number (if `allow_speedup`)
    pub speedup_at_c: f64,
    /// Shrink dt above this Courant number
    pub slowdn_at_c: f64,
    /// Side length of the periodic square
    pub domain: f64,
    /// Initial timestep. Defaults to `0.4 * 16 / n`.
    pub dt: Option<f64>,
    /// Robert-Asselin filter coefficient
    pub ra_coeff: f64,
    /// Transform backend
    pub backend: Backend,
    /// Rebuild the dissipation operator whenever dt changes
    pub dissipation_tracks_dt: bool,
    /// Stop integration at this time
    pub max_time: f64,
    /// Time between diagnostics callbacks, None for no callbacks
    pub save_interval: Option<f64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            n: 128,
            ic: "spot".to_string(),
            aa_fac: None,
            ubar: 0.0,
            beta: 1.7,
            tau: 0.1,
            allow_speedup: false,
            speedup_at_c: 0.6,
            slowdn_at_c: 0.8,
            domain: 1.0,
            dt: None,
            ra_coeff: 0.01,
            backend: Backend::Fft,
            dissipation_tracks_dt: true,
            max_time: 10.0,
            save_interval: Some(0.1),
        }
    }
}

impl Params {
    /// Default parameters at resolution n
    #[must_use]
    pub fn with_resolution(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    /// Read parameters from yaml file
    ///
    /// # Errors
    /// File can not be read, is malformed or the
    /// parameters do not pass [`Params::validate`].
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse parameters from yaml string
    ///
    /// # Errors
    /// See [`Params::from_yaml`]
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let params: Self = serde_yaml::from_str(contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Anti-alias factor, resolved against `n`
    #[allow(clippy::cast_precision_loss)]
    pub fn aa_fac(&self) -> f64 {
        self.aa_fac.unwrap_or(self.n as f64 / 6.)
    }

    /// Initial timestep, resolved against `n`
    #[allow(clippy::cast_precision_loss)]
    pub fn dt(&self) -> f64 {
        self.dt.unwrap_or(0.4 * 16.0 / self.n as f64)
    }

    /// Check admissible ranges
    ///
    /// # Errors
    /// Returns `Error::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.n < 4 || self.n % 2 != 0 {
            return Err(Error::InvalidParameter(format!(
                "n must be even and >= 4, got {}",
                self.n
            )));
        }
        if !(self.domain > 0.) {
            return Err(Error::InvalidParameter(format!(
                "domain must be positive, got {}",
                self.domain
            )));
        }
        if !(self.tau > 0.) {
            return Err(Error::InvalidParameter(format!(
                "tau must be positive, got {}",
                self.tau
            )));
        }
        if !(self.dt() > 0.) {
            return Err(Error::InvalidParameter(format!(
                "dt must be positive, got {}",
                self.dt()
            )));
        }
        if !(self.aa_fac() >= 0.) {
            return Err(Error::InvalidParameter(format!(
                "aa_fac must be non-negative, got {}",
                self.aa_fac()
            )));
        }
        if let Some(dt_save) = self.save_interval {
            if !(dt_save > 0.) {
                return Err(Error::InvalidParameter(format!(
                    "save_interval must be positive, got {}",
                    dt_save
                )));
            }
        }
        if self.speedup_at_c >= self.slowdn_at_c {
            return Err(Error::InvalidParameter(format!(
                "speedup_at_c ({}) must be smaller than slowdn_at_c ({})",
                self.speedup_at_c, self.slowdn_at_c
            )));
        }
        Ok(())
    }
}
