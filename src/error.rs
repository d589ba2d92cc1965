//! Error types.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while validating an instance, building the model,
/// solving it, or extracting a solution.
///
/// Structural problems with the input are always reported before any
/// solver interaction. Solver-side failures are passed through with the
/// backend's own message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SspError {
    /// The incidence matrix or a configuration value is malformed.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// The solver backend could not be initialized.
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),

    /// The solver proved that no feasible assignment exists.
    #[error("model is infeasible")]
    Infeasible,

    /// The time limit expired before the solver produced an incumbent.
    #[error("time limit reached after {elapsed:?} without a feasible solution")]
    TimedOut {
        /// Wall-clock time spent before giving up.
        elapsed: Duration,
    },

    /// Any other failure reported by the solver backend.
    #[error("solver error: {0}")]
    Solver(String),

    /// The solver returned an assignment that does not fit the model.
    #[error("invalid solution: {0}")]
    InvalidSolution(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, SspError>;
