//! Barotropic vorticity model on a periodic beta-plane
#[allow(clippy::module_inception)]
pub mod barotropic;
pub mod conv_term;
pub mod functions;
pub mod initial;
pub use barotropic::{Barotropic2D, Snapshot};
pub use conv_term::jacobian;
pub use initial::{InitialCondition, Registry};
