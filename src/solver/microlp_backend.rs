//! Backend built on the pure-Rust `microlp` solver.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem, Variable};
use tracing::{debug, warn};

use super::config::SolverConfig;
use super::types::{MilpSolver, RawSolution, SolverStatus};
use crate::error::{Result, SspError};
use crate::model::{ConstraintSense, SspModel};

/// MILP backend using `microlp`'s simplex and branch-and-bound.
///
/// `microlp` has no time limit or incumbent callback of its own. The solve
/// runs on a worker thread and the caller waits up to
/// [`SolverConfig::time_limit`]. When the limit expires there is no
/// incumbent to report, so the call fails with [`SspError::TimedOut`] and
/// the worker is left to finish in the background. A completed solve is
/// proven optimal, so the returned gap is always 0.
#[derive(Debug, Clone, Default)]
pub struct MicroLpSolver;

impl MicroLpSolver {
    pub fn new() -> Self {
        Self
    }
}

/// Translates the model into a `microlp` problem.
///
/// Returned variables are parallel to the model's variable table.
fn to_problem(model: &SspModel) -> (Problem, Vec<Variable>) {
    let mut problem = Problem::new(OptimizationDirection::Minimize);
    let vars: Vec<Variable> = model
        .objective_coefficients()
        .into_iter()
        .map(|coef| problem.add_binary_var(coef))
        .collect();

    for c in model.constraints() {
        let expr: LinearExpr = c
            .terms
            .iter()
            .map(|&(var, coef)| (vars[var.index()], coef))
            .collect();
        let op = match c.sense {
            ConstraintSense::Le => ComparisonOp::Le,
            ConstraintSense::Eq => ComparisonOp::Eq,
        };
        problem.add_constraint(expr, op, c.rhs);
    }

    (problem, vars)
}

impl MilpSolver for MicroLpSolver {
    fn name(&self) -> &str {
        "microlp"
    }

    fn solve(&self, model: &SspModel, config: &SolverConfig) -> Result<RawSolution> {
        model.validate().map_err(SspError::Solver)?;

        let (problem, vars) = to_problem(model);
        let (tx, rx) = mpsc::channel();
        let start = Instant::now();

        thread::Builder::new()
            .name("microlp-solve".into())
            .spawn(move || {
                let outcome = problem.solve().map(|solution| {
                    let values: Vec<f64> = vars.iter().map(|&var| solution[var]).collect();
                    (solution.objective(), values)
                });
                // The receiver is gone if the caller already timed out.
                let _ = tx.send(outcome);
            })
            .map_err(|e| SspError::SolverUnavailable(format!("cannot spawn solver thread: {e}")))?;

        match rx.recv_timeout(config.time_limit) {
            Ok(Ok((objective_value, values))) => {
                let elapsed = start.elapsed();
                debug!(objective = objective_value, ?elapsed, "microlp finished");
                Ok(RawSolution {
                    status: SolverStatus::Optimal,
                    objective_value,
                    gap: 0.0,
                    values,
                    elapsed,
                    solver_name: self.name().to_string(),
                })
            }
            Ok(Err(microlp::Error::Infeasible)) => Err(SspError::Infeasible),
            Ok(Err(e)) => Err(SspError::Solver(e.to_string())),
            Err(RecvTimeoutError::Timeout) => {
                let elapsed = start.elapsed();
                warn!(?elapsed, limit = ?config.time_limit, "microlp hit the time limit");
                Err(SspError::TimedOut { elapsed })
            }
            Err(RecvTimeoutError::Disconnected) => Err(SspError::Solver(
                "solver thread exited without a result".into(),
            )),
        }
    }
}
