//! Error types for the NSGA-II optimizer.
//!
//! Structured error handling following the `thiserror` library-error
//! pattern, with helper methods for error categorization.

use thiserror::Error;

/// Errors that can occur while configuring or running NSGA-II.
#[derive(Debug, Error)]
pub enum Nsga2Error {
    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds array
        lower_len: usize,
        /// Length of the upper bounds array
        upper_len: usize,
    },

    /// A lower bound exceeds its corresponding upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Population size is too small (must be >= 4).
    #[error("population size ({pop_size}) must be >= 4")]
    PopulationTooSmall {
        /// The invalid population size
        pop_size: usize,
    },

    /// Population size is not a multiple of four, which the crowded
    /// tournament pairing requires.
    #[error("population size ({pop_size}) must be a multiple of 4 for tournament selection")]
    PopulationNotMultipleOfFour {
        /// The invalid population size
        pop_size: usize,
    },

    /// A probability parameter is outside [0, 1].
    #[error("invalid probability {name}: {value} (must be in [0, 1])")]
    InvalidProbability {
        /// Name of the offending parameter
        name: &'static str,
        /// The invalid value
        value: f64,
    },

    /// A distribution index (eta) is not strictly positive.
    #[error("invalid distribution index {name}: {value} (must be > 0)")]
    InvalidDistributionIndex {
        /// Name of the offending parameter
        name: &'static str,
        /// The invalid value
        value: f64,
    },

    /// The configured number of objectives is zero.
    #[error("number of objectives ({n_objectives}) must be >= 1")]
    InvalidObjectiveCount {
        /// The invalid objective count
        n_objectives: usize,
    },

    /// The objective function returned a tuple of the wrong arity.
    /// Fatal for the run; carries the offending genome.
    #[error("objective arity mismatch: expected {expected} values, got {got} for x = {x:?}")]
    ObjectiveArityMismatch {
        /// Configured number of objectives
        expected: usize,
        /// Number of values the objective function returned
        got: usize,
        /// The genome that triggered the mismatch
        x: Vec<f64>,
    },

    /// An indicator was asked to compare against an empty reference front.
    #[error("reference front is empty")]
    EmptyReferenceFront,

    /// Reading a persisted reference front failed.
    #[error("failed to read reference front from {path}")]
    ReferenceFrontIo {
        /// Path of the reference front file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Parsing a persisted reference front failed.
    #[error("failed to parse reference front from {path}")]
    ReferenceFrontParse {
        /// Path of the reference front file
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized `Result` type for NSGA-II operations.
pub type Result<T> = std::result::Result<T, Nsga2Error>;

impl Nsga2Error {
    /// Returns `true` if this is a bounds-related error.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            Nsga2Error::BoundsMismatch { .. } | Nsga2Error::InvalidBounds { .. }
        )
    }

    /// Returns `true` if this is a configuration-related error,
    /// rejected before any generation runs.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Nsga2Error::PopulationTooSmall { .. }
                | Nsga2Error::PopulationNotMultipleOfFour { .. }
                | Nsga2Error::InvalidProbability { .. }
                | Nsga2Error::InvalidDistributionIndex { .. }
                | Nsga2Error::InvalidObjectiveCount { .. }
        )
    }

    /// Returns `true` if this error aborts an evolutionary run.
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, Nsga2Error::ObjectiveArityMismatch { .. })
    }

    /// Returns `true` if this is a quality-indicator error, local to the
    /// reporting step and not affecting an evolved population.
    pub fn is_indicator_error(&self) -> bool {
        matches!(
            self,
            Nsga2Error::EmptyReferenceFront
                | Nsga2Error::ReferenceFrontIo { .. }
                | Nsga2Error::ReferenceFrontParse { .. }
        )
    }
}
