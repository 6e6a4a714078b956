//! # Barotropic vorticity equation
//! Pseudospectral solver on a doubly periodic beta-plane.
//!
//! Solves
//! $$
//! \partial_t \zeta + J(\psi, \zeta) + \bar{u} \partial_x \zeta + \beta \partial_x \psi = 0,
//! \quad \zeta = \nabla^2 \psi
//! $$
//! with leapfrog time stepping, a Robert-Asselin filter, scale selective
//! del4 damping and anti-aliasing of the nonlinear term.
//!
//! # Example
//! ```
//! use barovort::{Barotropic2D, Params};
//! let params = Params::with_resolution(32);
//! let mut model = Barotropic2D::new(&params).unwrap();
//! for _ in 0..10 {
//!     let snapshot = model.step();
//!     assert!(snapshot.courant.is_finite());
//! }
//! ```
use super::conv_term::jacobian;
use super::functions::{
    courant_number, dissipate, leapfrog, norm_l2, raw_filter, total_enstrophy, TimestepControl,
};
use super::initial::Registry;
use crate::bases::Base;
use crate::error::{Error, Result};
use crate::field::{dealias, gradient};
use crate::params::Params;
use crate::space::{hyperviscosity, Space2};
use crate::Integrate;
use log::{debug, info, warn};
use ndarray::{Array2, ArrayView2, Zip};
use num_complex::Complex;
use std::collections::HashMap;

/// Output of a single time step
pub struct Snapshot<'a> {
    /// Vorticity in physical space at the beginning of the step
    pub z: ArrayView2<'a, Complex<f64>>,
    /// Courant number of the step
    pub courant: f64,
    /// Timestep after adaption, used for the step
    pub dt: f64,
}

impl Snapshot<'_> {
    /// Real part of vorticity
    pub fn vorticity(&self) -> Array2<f64> {
        self.z.mapv(|x| x.re)
    }
}

/// Solve the 2-dimensional barotropic vorticity equation
///
/// Struct must be mutable, to perform the
/// update step, which advances the solution
/// by 1 timestep.
pub struct Barotropic2D {
    /// Spectral operators and transform
    space: Space2,
    /// Vorticity in physical space (one step behind zt)
    z: Array2<Complex<f64>>,
    /// Vorticity in spectral space
    zt: Array2<Complex<f64>>,
    /// Filtered vorticity of the previous time level
    zt_prev: Array2<Complex<f64>>,
    /// Leapfrog result of the last step
    zt_next: Array2<Complex<f64>>,
    /// Dissipation operator
    del4: Array2<f64>,
    /// Hyperviscosity
    nu: f64,
    /// Anti-aliasing cutoff
    k_max: f64,
    /// Background zonal velocity
    pub ubar: f64,
    /// Beta-plane coefficient
    pub beta: f64,
    /// Robert-Asselin coefficient
    pub ra_coeff: f64,
    /// Courant number based timestep control
    pub control: TimestepControl,
    /// Rebuild del4 when dt changes
    pub dissipation_tracks_dt: bool,
    /// Time step size
    dt: f64,
    /// Time
    time: f64,
    /// Courant number of the last step
    courant: f64,
    /// Number of steps taken
    nstep: usize,
    /// Enstrophy at t = 0
    pub enstrophy0: f64,
    /// diagnostics like courant number, dt, ...
    pub diagnostics: HashMap<String, Vec<f64>>,
}

impl Barotropic2D {
    /// Set up model with the initial condition named in params,
    /// looked up in the default registry.
    ///
    /// # Errors
    /// Invalid parameters or unknown initial condition.
    pub fn new(params: &Params) -> Result<Self> {
        Self::with_registry(params, &Registry::default())
    }

    /// Set up model, initial condition is looked up in `registry`
    ///
    /// # Errors
    /// Invalid parameters or unknown initial condition.
    pub fn with_registry(params: &Params, registry: &Registry) -> Result<Self> {
        params.validate()?;
        let ic = registry.get(&params.ic)?;
        let mut z = Array2::zeros((params.n, params.n));
        ic(&mut z);
        Self::from_vorticity(params, z)
    }

    /// Set up model from a vorticity field in physical space.
    /// `params.ic` is ignored.
    ///
    /// # Errors
    /// Invalid parameters or shape of `z` is not (n, n).
    pub fn from_vorticity(params: &Params, z: Array2<Complex<f64>>) -> Result<Self> {
        params.validate()?;
        let n = params.n;
        if z.shape() != [n, n] {
            return Err(Error::ShapeMismatch {
                n,
                got: z.shape().to_vec(),
            });
        }
        let dt = params.dt();
        let mut space = Space2::new(n, params.domain, Base::from_backend(params.backend, n));
        let nu = hyperviscosity(n, params.domain, params.tau);
        let del4 = space.dissipation(nu, dt);
        let k_max = space.k_max(params.aa_fac());

        // previous and next level start out equal to the current one
        let zt = space.ft(&z);
        let zt_prev = zt.clone();
        let zt_next = zt.clone();

        let enstrophy0 = total_enstrophy(&zt);
        info!("Initial Enstrophy: {:.3e}", enstrophy0);

        let mut diagnostics = HashMap::new();
        diagnostics.insert("time".to_string(), Vec::<f64>::new());
        diagnostics.insert("courant".to_string(), Vec::<f64>::new());
        diagnostics.insert("dt".to_string(), Vec::<f64>::new());
        diagnostics.insert("enstrophy".to_string(), Vec::<f64>::new());

        Ok(Self {
            space,
            z,
            zt,
            zt_prev,
            zt_next,
            del4,
            nu,
            k_max,
            ubar: params.ubar,
            beta: params.beta,
            ra_coeff: params.ra_coeff,
            control: TimestepControl {
                speedup_at_c: params.speedup_at_c,
                slowdn_at_c: params.slowdn_at_c,
                allow_speedup: params.allow_speedup,
            },
            dissipation_tracks_dt: params.dissipation_tracks_dt,
            dt,
            time: 0.,
            courant: 0.,
            nstep: 0,
            enstrophy0,
            diagnostics,
        })
    }

    /// Advance vorticity by one timestep.
    ///
    /// The returned field is the vorticity at the beginning of
    /// the step, `dt` is the timestep this step was taken with.
    pub fn step(&mut self) -> Snapshot<'_> {
        // Poisson equation zeta = lap psi, in fourier space
        // F[psi] = - F[zeta] / (k^2 + l^2)
        let psit = Zip::from(&self.zt)
            .and(&self.space.rksq)
            .map_collect(|&z, &r| -z * r);
        let (psixt, psiyt) = gradient(&self.space, &psit);
        let (zxt, zyt) = gradient(&self.space, &self.zt);

        // physical space for the pseudospectral part
        self.z = self.space.ift(&self.zt);
        let psix = self.space.ift(&psixt);
        let psiy = self.space.ift(&psiyt);
        let zx = self.space.ift(&zxt);
        let zy = self.space.ift(&zyt);

        // adapt timestep before it is used in this step
        let c = courant_number(&psix, &psiy, self.space.dx, self.dt);
        let dt = self.control.adapt(c, self.dt);
        if (dt - self.dt).abs() > 0. {
            debug!(
                "Courant No {:4.2}, timestep {:5.3e} -> {:5.3e}",
                c, self.dt, dt
            );
            self.set_dt(dt);
        }

        // nonlinear term, anti-aliased
        let jac = jacobian(&psix, &psiy, &zx, &zy, self.ubar);
        let mut jact = self.space.ft(&jac);
        dealias(&mut jact, &self.space, self.k_max);

        // rhs = -J - beta dpsi/dx
        let beta = self.beta;
        let rhs = Zip::from(&jact)
            .and(&psixt)
            .map_collect(|&j, &px| -j - px * beta);

        // leapfrog + dissipation
        self.zt_next = leapfrog(&self.zt_prev, &rhs, self.dt);
        dissipate(&mut self.zt_next, &self.del4);

        // Robert-Asselin filter and rotation of time levels
        self.zt_prev = raw_filter(&self.zt_prev, &self.zt, &self.zt_next, self.ra_coeff);
        self.zt.assign(&self.zt_next);

        self.courant = c;
        self.time += self.dt;
        self.nstep += 1;
        Snapshot {
            z: self.z.view(),
            courant: c,
            dt: self.dt,
        }
    }

    /// Set timestep, rebuilds dissipation operator
    /// if `dissipation_tracks_dt`
    pub fn set_dt(&mut self, dt: f64) {
        self.dt = dt;
        if self.dissipation_tracks_dt {
            self.del4 = self.space.dissipation(self.nu, dt);
        }
    }

    /// Real part of vorticity in physical space
    pub fn vorticity(&self) -> Array2<f64> {
        self.z.mapv(|x| x.re)
    }

    /// Vorticity in spectral space
    pub fn zt(&self) -> &Array2<Complex<f64>> {
        &self.zt
    }

    /// Filtered vorticity of the previous time level
    pub fn zt_prev(&self) -> &Array2<Complex<f64>> {
        &self.zt_prev
    }

    /// Dissipation operator
    pub fn del4(&self) -> &Array2<f64> {
        &self.del4
    }

    /// Anti-aliasing cutoff
    pub fn k_max(&self) -> f64 {
        self.k_max
    }

    /// Spectral space
    pub fn space(&self) -> &Space2 {
        &self.space
    }

    /// Courant number of the last step
    pub fn courant(&self) -> f64 {
        self.courant
    }

    /// Number of steps taken
    pub fn nstep(&self) -> usize {
        self.nstep
    }

    /// Current total enstrophy
    pub fn enstrophy(&self) -> f64 {
        total_enstrophy(&self.zt)
    }

    /// Reset time
    pub fn reset_time(&mut self) {
        self.time = 0.;
    }
}

impl Integrate for Barotropic2D {
    /// Update 1 timestep
    fn update(&mut self) {
        self.step();
    }

    fn get_time(&self) -> f64 {
        self.time
    }

    fn get_dt(&self) -> f64 {
        self.dt
    }

    fn callback(&mut self) {
        let enstrophy = self.enstrophy();
        let vort = self.vorticity();
        let (zmin, zmax) = vort
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        info!(
            "time = {:6.3}   [Courant No: {:3.2}] dt = {:4.3}   Z/Z0 = {:5.3e}   zeta = [{:5.2}, {:5.2}]",
            self.time,
            self.courant,
            self.dt,
            enstrophy / self.enstrophy0,
            zmin,
            zmax,
        );
        if let Some(d) = self.diagnostics.get_mut("time") {
            d.push(self.time);
        }
        if let Some(d) = self.diagnostics.get_mut("courant") {
            d.push(self.courant);
        }
        if let Some(d) = self.diagnostics.get_mut("dt") {
            d.push(self.dt);
        }
        if let Some(d) = self.diagnostics.get_mut("enstrophy") {
            d.push(enstrophy);
        }
    }

    fn exit(&mut self) -> bool {
        // Break if vorticity or courant number is not finite
        if !self.courant.is_finite() || !norm_l2(&self.zt).is_finite() {
            warn!(
                "Solution diverged at step {} (time = {:4.2}).",
                self.nstep, self.time
            );
            return true;
        }
        false
    }
}
