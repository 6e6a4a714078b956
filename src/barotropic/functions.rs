//! Building blocks of the time step: Courant number,
//! timestep control, leapfrog and Robert-Asselin filter.
use crate::field::enstrophy;
use ndarray::{Array2, Zip};
use num_complex::Complex;

/// Courant number (max|u| + max|v|) * dt / dx, where
/// u = dpsi/dy and v = -dpsi/dx
pub fn courant_number(
    psix: &Array2<Complex<f64>>,
    psiy: &Array2<Complex<f64>>,
    dx: f64,
    dt: f64,
) -> f64 {
    let maxu = psiy.iter().fold(0_f64, |m, x| m.max(x.norm()));
    let maxv = psix.iter().fold(0_f64, |m, x| m.max(x.norm()));
    (maxu + maxv) * dt / dx
}

/// Adapts the timestep to the Courant number
#[derive(Debug, Clone, Copy)]
pub struct TimestepControl {
    /// Grow dt below this Courant number
    pub speedup_at_c: f64,
    /// Shrink dt above this Courant number
    pub slowdn_at_c: f64,
    /// Growing is only done if true
    pub allow_speedup: bool,
}

impl TimestepControl {
    /// Factor applied when the Courant number is too large
    pub const SLOWDN: f64 = 0.9;
    /// Factor applied when the Courant number is small
    pub const SPEEDUP: f64 = 1.1;

    /// Return timestep adapted to Courant number c.
    /// A NaN Courant number leaves dt untouched.
    pub fn adapt(&self, c: f64, dt: f64) -> f64 {
        if c > self.slowdn_at_c {
            Self::SLOWDN * dt
        } else if c < self.speedup_at_c && self.allow_speedup {
            Self::SPEEDUP * dt
        } else {
            dt
        }
    }
}

impl Default for TimestepControl {
    fn default() -> Self {
        Self {
            speedup_at_c: 0.6,
            slowdn_at_c: 0.8,
            allow_speedup: false,
        }
    }
}

/// Leapfrog time integration, phi + 2 dt f
pub fn leapfrog(
    phi: &Array2<Complex<f64>>,
    f: &Array2<Complex<f64>>,
    dt: f64,
) -> Array2<Complex<f64>> {
    Zip::from(phi)
        .and(f)
        .map_collect(|&p, &rhs| p + rhs * (2.0 * dt))
}

/// Multiply spectral field with a real damping operator
pub fn dissipate(phit: &mut Array2<Complex<f64>>, del4: &Array2<f64>) {
    Zip::from(phit)
        .and(del4)
        .par_for_each(|p, &d| *p *= d);
}

/// Robert-Asselin filter
/// $$
/// curr + nu (new - 2 curr + prev)
/// $$
pub fn raw_filter(
    prev: &Array2<Complex<f64>>,
    curr: &Array2<Complex<f64>>,
    new: &Array2<Complex<f64>>,
    nu: f64,
) -> Array2<Complex<f64>> {
    Zip::from(prev)
        .and(curr)
        .and(new)
        .map_collect(|&p, &c, &n| c + (n - c * 2.0 + p) * nu)
}

/// Sum of enstrophy over all modes
pub fn total_enstrophy(zt: &Array2<Complex<f64>>) -> f64 {
    enstrophy(zt).sum()
}

/// L2 norm
pub fn norm_l2(array: &Array2<Complex<f64>>) -> f64 {
    array.iter().map(|x| x.norm_sqr()).sum::<f64>().sqrt()
}
