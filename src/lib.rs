#![warn(missing_docs)]
//! # barovort: barotropic vorticity on a periodic beta-plane
//!
//! Pseudospectral solver for the two-dimensional barotropic
//! vorticity equation
//! $$
//! \partial_t \zeta + J(\psi, \zeta) + \beta \partial_x \psi = 0,
//! \quad \zeta = \nabla^2 \psi
//! $$
//! on a doubly periodic square. Derivatives and the Poisson
//! solve are exact in fourier space, the nonlinear term is
//! evaluated in physical space and anti-aliased.
//!
//! Time stepping is leapfrog with a Robert-Asselin filter,
//! scale selective damping and a timestep that adapts to the
//! Courant number.
//!
//! # Example
//! ```
//! use barovort::{integrate, Barotropic2D, Params};
//! let params = Params::with_resolution(32);
//! let mut model = Barotropic2D::new(&params).unwrap();
//! integrate(&mut model, 0.5, Some(0.1));
//! ```
pub mod barotropic;
pub mod bases;
pub mod error;
pub mod field;
pub mod integrate;
pub mod params;
pub mod space;
pub use barotropic::{Barotropic2D, Registry, Snapshot};
pub use bases::{dft, fourier, Base, Transform};
pub use error::{Error, Result};
pub use field::Field2;
pub use integrate::{integrate, Integrate};
pub use params::{Backend, Params};
pub use space::Space2;
