//! Solver boundary types.

use std::time::Duration;

use super::config::SolverConfig;
use crate::error::Result;
use crate::model::SspModel;

/// Status reported by a backend alongside a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// Feasible (but not necessarily optimal) solution found.
    Feasible,
    /// Time limit hit; the incumbent is returned with its gap.
    TimeLimit,
}

/// Raw output of a backend for one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// Objective value of the returned assignment.
    pub objective_value: f64,
    /// Relative optimality gap; 0 when optimality is proven.
    pub gap: f64,
    /// Value of every variable, indexed by [`VarId`](crate::model::VarId).
    pub values: Vec<f64>,
    /// Wall-clock solve time.
    pub elapsed: Duration,
    /// Backend that produced this solution.
    pub solver_name: String,
}

/// Trait for MILP solver backends.
///
/// A backend receives the complete model and a configuration, performs a
/// single solve, and returns either an assignment for every declared
/// variable or an error. Returned assignments must be feasible; they need
/// not be optimal (see [`RawSolution::gap`]).
///
/// Backends map their own failure modes onto the crate error type:
/// [`SspError::Infeasible`](crate::SspError::Infeasible) for proven
/// infeasibility, [`SspError::TimedOut`](crate::SspError::TimedOut) when
/// the limit expires without an incumbent,
/// [`SspError::SolverUnavailable`](crate::SspError::SolverUnavailable) when
/// the backend cannot start, and
/// [`SspError::Solver`](crate::SspError::Solver) for anything else.
///
/// A backend may keep working after `solve` has returned. The bundled
/// [`MicroLpSolver`](super::MicroLpSolver) cannot interrupt `microlp`, so
/// after a timeout its worker thread runs until branch-and-bound ends.
/// Callers looping over many instances with tight limits should expect
/// these threads to accumulate.
pub trait MilpSolver {
    /// Backend name used in logs and results.
    fn name(&self) -> &str;

    /// Solves the model.
    fn solve(&self, model: &SspModel, config: &SolverConfig) -> Result<RawSolution>;
}
