//! End-to-end solve: validate, build, solve, extract.

use tracing::{info, warn};

use super::config::SspConfig;
use crate::error::{Result, SspError};
use crate::formulation::TangDenardoBuilder;
use crate::instance::{Incidence, IncidenceMatrix};
use crate::solution::{extract, SolutionRecord};
use crate::solver::{MicroLpSolver, MilpSolver};

/// Runs the SSP pipeline.
///
/// Each call is independent: the incidence maps, the model and the record
/// are created and consumed within the call, and the solver is passed in.
pub struct SspRunner;

impl SspRunner {
    /// Solves an instance with the bundled [`MicroLpSolver`].
    pub fn solve(matrix: &IncidenceMatrix, config: &SspConfig) -> Result<SolutionRecord> {
        Self::run(matrix, config, &MicroLpSolver::new())
    }

    /// Solves an instance with the given backend.
    ///
    /// # Errors
    ///
    /// - [`SspError::InvalidInstance`] for a malformed matrix or
    ///   configuration, raised before any variable is created
    /// - any error returned by the backend, unchanged
    /// - [`SspError::InvalidSolution`] if the backend output does not fit
    ///   the model or, with `config.verify`, violates the formulation
    pub fn run<S: MilpSolver>(
        matrix: &IncidenceMatrix,
        config: &SspConfig,
        solver: &S,
    ) -> Result<SolutionRecord> {
        config.validate().map_err(SspError::InvalidInstance)?;

        let incidence = Incidence::from_matrix(matrix)?;
        let builder = TangDenardoBuilder::new(&incidence, config.capacity)?;
        if incidence.max_tools_per_job() > config.capacity {
            warn!(
                capacity = config.capacity,
                max_tools_per_job = incidence.max_tools_per_job(),
                "some job needs more tools than the magazine holds"
            );
        }

        let model = builder.build();
        let stats = model.stats();
        info!(
            event = "solve_start",
            solver = solver.name(),
            jobs = incidence.num_jobs(),
            tools = incidence.num_tools(),
            capacity = config.capacity,
            vars = stats.num_vars(),
            constraints = stats.num_constraints(),
            time_limit_ms = config.solver.time_limit.as_millis() as u64,
            "solving tool switching model"
        );

        let raw = solver.solve(&model, &config.solver).inspect_err(|e| {
            warn!(event = "solve_failed", solver = solver.name(), error = %e, "solver returned an error");
        })?;

        let record = extract(&model, raw, config.solver.integrality_tolerance)?;
        if config.verify {
            record.verify(&incidence, config.capacity)?;
        }

        info!(
            event = "solve_end",
            status = ?record.status(),
            objective = record.objective_value(),
            gap = record.gap(),
            elapsed_ms = record.elapsed().as_millis() as u64,
            sequence = ?record.sequence(),
            "tool switching model solved"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use super::*;
    use crate::model::SspModel;
    use crate::solver::{RawSolution, SolverConfig, SolverStatus};

    /// Backend that records whether it was called and fails.
    struct Recording {
        called: Cell<bool>,
        result: SspError,
    }

    impl MilpSolver for Recording {
        fn name(&self) -> &str {
            "recording"
        }

        fn solve(&self, _model: &SspModel, _config: &SolverConfig) -> Result<RawSolution> {
            self.called.set(true);
            Err(self.result.clone())
        }
    }

    /// Backend that returns a fixed assignment.
    struct Fixed(Vec<f64>, f64);

    impl MilpSolver for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn solve(&self, _model: &SspModel, _config: &SolverConfig) -> Result<RawSolution> {
            Ok(RawSolution {
                status: SolverStatus::TimeLimit,
                objective_value: self.1,
                gap: 0.5,
                values: self.0.clone(),
                elapsed: Duration::from_secs(1),
                solver_name: "fixed".into(),
            })
        }
    }

    fn recording(result: SspError) -> Recording {
        Recording {
            called: Cell::new(false),
            result,
        }
    }

    #[test]
    fn test_invalid_entry_fails_before_solver() {
        let matrix = IncidenceMatrix::from_rows(vec![vec![1, 2], vec![1, 1]]).unwrap();
        let solver = recording(SspError::Infeasible);
        let err = SspRunner::run(&matrix, &SspConfig::new(1), &solver).unwrap_err();
        assert!(matches!(err, SspError::InvalidInstance(_)));
        assert!(!solver.called.get());
    }

    #[test]
    fn test_capacity_above_tool_count() {
        let matrix = IncidenceMatrix::from_rows(vec![vec![1, 1]]).unwrap();
        let solver = recording(SspError::Infeasible);
        let err = SspRunner::run(&matrix, &SspConfig::new(2), &solver).unwrap_err();
        assert!(matches!(err, SspError::InvalidInstance(_)));
        assert!(!solver.called.get());
    }

    #[test]
    fn test_solver_errors_pass_through() {
        let matrix = IncidenceMatrix::from_rows(vec![vec![1, 1]]).unwrap();
        for expected in [
            SspError::Infeasible,
            SspError::SolverUnavailable("no license".into()),
            SspError::TimedOut {
                elapsed: Duration::from_secs(3),
            },
        ] {
            let solver = recording(expected.clone());
            let err = SspRunner::run(&matrix, &SspConfig::new(1), &solver).unwrap_err();
            assert_eq!(err, expected);
            assert!(solver.called.get());
        }
    }

    #[test]
    fn test_time_limited_incumbent_is_reported() {
        // two jobs sharing one tool; order (2, 1)
        let matrix = IncidenceMatrix::from_rows(vec![vec![1, 1]]).unwrap();
        // U(1,1) U(1,2) U(2,1) U(2,2) V(1,1) V(2,1) W(2,1)
        let values = vec![0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0];
        let record = SspRunner::run(&matrix, &SspConfig::new(1), &Fixed(values, 1.0)).unwrap();

        assert_eq!(record.status(), SolverStatus::TimeLimit);
        assert_eq!(record.gap(), 0.5);
        assert!(!record.is_optimal());
        assert_eq!(record.sequence(), vec![2, 1]);
        assert_eq!(record.rescore(), 1);
    }

    #[test]
    fn test_verification_rejects_bad_incumbent() {
        let matrix = IncidenceMatrix::from_rows(vec![vec![1, 1]]).unwrap();
        // V(2,1) missing although job 1 at position 2 needs tool 1
        let values = vec![0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0];
        let err = SspRunner::run(&matrix, &SspConfig::new(1), &Fixed(values.clone(), 0.0))
            .unwrap_err();
        assert!(matches!(err, SspError::InvalidSolution(_)));

        let unchecked = SspConfig::new(1).with_verify(false);
        assert!(SspRunner::run(&matrix, &unchecked, &Fixed(values, 0.0)).is_ok());
    }
}
