//! Errors raised while setting up a simulation
use thiserror::Error;

/// Setup errors. Time stepping itself never fails, runaway
/// values show up in the returned diagnostics instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Name is not in the initial condition registry
    #[error("Unknown initial condition {0:?}")]
    UnknownInitialCondition(String),

    /// Parameter out of its admissible range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Supplied field does not match the grid
    #[error("Shape mismatch: expected ({n}, {n}), got {got:?}")]
    ShapeMismatch {
        /// Grid resolution
        n: usize,
        /// Shape of the supplied array
        got: Vec<usize>,
    },

    /// Reading a parameter file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parameter file is not valid yaml
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result alias used for all fallible setup routines
pub type Result<T> = std::result::Result<T, Error>;
