//! Partitioning a raw assignment into typed active sets.

use tracing::debug;

use super::record::{
    ActiveAssignment, ActivePresence, ActiveSwitch, SolutionRecord, SolveDiagnostics,
};
use crate::error::{Result, SspError};
use crate::model::{SspModel, SspVar};
use crate::solver::RawSolution;

/// Builds a [`SolutionRecord`] from a backend's raw output.
///
/// Each value is classified by the [`SspVar`] tag of its variable. A value
/// is active when it rounds to 1. Values further than `tolerance` from 0
/// or 1 are rejected rather than rounded, as is an objective value that
/// disagrees with the active sets.
///
/// # Errors
///
/// [`SspError::InvalidSolution`] if the value count does not match the
/// model, a value is not (near-)binary, or the reported objective does not
/// match the recomputed one.
pub fn extract(model: &SspModel, raw: RawSolution, tolerance: f64) -> Result<SolutionRecord> {
    if raw.values.len() != model.num_vars() {
        return Err(SspError::InvalidSolution(format!(
            "expected {} values, got {}",
            model.num_vars(),
            raw.values.len()
        )));
    }

    let mut assignments = Vec::with_capacity(model.num_jobs());
    let mut presence = Vec::new();
    let mut switches = Vec::new();

    for (var, &value) in model.variables().iter().zip(&raw.values) {
        let rounded = value.round();
        let binary = rounded == 0.0 || rounded == 1.0;
        if !value.is_finite() || !binary || (value - rounded).abs() > tolerance {
            return Err(SspError::InvalidSolution(format!(
                "{var} = {value} is not binary"
            )));
        }
        if rounded == 0.0 {
            continue;
        }
        match *var {
            SspVar::Assignment { job, position } => {
                assignments.push(ActiveAssignment { job, position })
            }
            SspVar::Presence { position, tool } => presence.push(ActivePresence { position, tool }),
            SspVar::Switch { position, tool } => switches.push(ActiveSwitch { position, tool }),
        }
    }

    assignments.sort_by_key(|a| (a.position, a.job));
    presence.sort();
    switches.sort();

    let record = SolutionRecord {
        num_jobs: model.num_jobs(),
        num_tools: model.num_tools(),
        diagnostics: SolveDiagnostics {
            objective_value: raw.objective_value,
            gap: raw.gap,
            elapsed: raw.elapsed,
            status: raw.status,
            solver_name: raw.solver_name,
        },
        assignments,
        presence,
        switches,
    };

    let rescored = record.rescore() as f64;
    let slack = tolerance * model.objective().len().max(1) as f64;
    if (rescored - record.objective_value()).abs() > slack.max(1e-6) {
        return Err(SspError::InvalidSolution(format!(
            "reported objective {} does not match active sets ({rescored})",
            record.objective_value()
        )));
    }

    debug!(
        assignments = record.assignments.len(),
        presence = record.presence.len(),
        switches = record.switches.len(),
        "extracted solution"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::formulation::TangDenardoBuilder;
    use crate::instance::{Incidence, IncidenceMatrix};
    use crate::solver::SolverStatus;

    // tools: 1 -> job 1, 2 -> job 2, 3 -> both
    fn model() -> SspModel {
        let matrix = IncidenceMatrix::from_rows(vec![vec![1, 0], vec![0, 1], vec![1, 1]]).unwrap();
        let inc = Incidence::from_matrix(&matrix).unwrap();
        TangDenardoBuilder::new(&inc, 2).unwrap().build()
    }

    /// Assignment for sequence (1, 2): V(1) = {1,3}, V(2) = {2,3}, W(2,2).
    fn values(model: &SspModel) -> Vec<f64> {
        model
            .variables()
            .iter()
            .map(|var| match *var {
                SspVar::Assignment { job, position } => f64::from(u8::from(job == position)),
                SspVar::Presence { position: 1, tool } => f64::from(u8::from(tool != 2)),
                SspVar::Presence { position: _, tool } => f64::from(u8::from(tool != 1)),
                SspVar::Switch { tool, .. } => f64::from(u8::from(tool == 2)),
            })
            .collect()
    }

    fn raw(values: Vec<f64>, objective_value: f64) -> RawSolution {
        RawSolution {
            status: SolverStatus::Optimal,
            objective_value,
            gap: 0.0,
            values,
            elapsed: Duration::from_millis(3),
            solver_name: "test".into(),
        }
    }

    #[test]
    fn test_partition() {
        let model = model();
        let record = extract(&model, raw(values(&model), 3.0), 1e-6).unwrap();

        assert_eq!(
            record.assignments(),
            &[
                ActiveAssignment { job: 1, position: 1 },
                ActiveAssignment { job: 2, position: 2 },
            ]
        );
        assert_eq!(record.loadout(1), vec![1, 3]);
        assert_eq!(record.loadout(2), vec![2, 3]);
        assert_eq!(record.switches(), &[ActiveSwitch { position: 2, tool: 2 }]);
        assert_eq!(record.rescore(), 3);
        assert_eq!(record.solver_name(), "test");
        assert!(record.is_optimal());
    }

    #[test]
    fn test_near_binary_values() {
        let model = model();
        let noisy: Vec<f64> = values(&model)
            .into_iter()
            .map(|v| if v == 1.0 { 0.9999999 } else { 1e-9 })
            .collect();
        let record = extract(&model, raw(noisy, 2.9999997), 1e-6).unwrap();
        assert_eq!(record.sequence(), vec![1, 2]);
        assert_eq!(record.switch_count(), 1);
    }

    #[test]
    fn test_fractional_value() {
        let model = model();
        let mut vals = values(&model);
        vals[0] = 0.5;
        let err = extract(&model, raw(vals, 3.0), 1e-6).unwrap_err();
        assert!(matches!(err, SspError::InvalidSolution(ref msg) if msg.contains("U(1,1)")));
    }

    #[test]
    fn test_out_of_range_value() {
        let model = model();
        let mut vals = values(&model);
        vals[1] = 2.0;
        assert!(extract(&model, raw(vals, 3.0), 1e-6).is_err());
    }

    #[test]
    fn test_wrong_length() {
        let model = model();
        let err = extract(&model, raw(vec![1.0; 3], 3.0), 1e-6).unwrap_err();
        assert!(matches!(err, SspError::InvalidSolution(_)));
    }

    #[test]
    fn test_objective_mismatch() {
        let model = model();
        let err = extract(&model, raw(values(&model), 5.0), 1e-6).unwrap_err();
        assert!(matches!(err, SspError::InvalidSolution(ref msg) if msg.contains("objective")));
    }
}
