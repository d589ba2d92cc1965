//! Structural checks of an extracted solution against its instance.

use std::collections::BTreeSet;

use super::record::SolutionRecord;
use crate::error::{Result, SspError};
use crate::instance::Incidence;

impl SolutionRecord {
    /// Checks the record against the instance it was solved for.
    ///
    /// Verifies that:
    /// - the active assignments form a bijection between jobs and positions;
    /// - every tool required by the job at a position is present there;
    /// - no position holds more than `capacity` tools;
    /// - a tool present at `k` but not at `k-1` has an active switch at `k`.
    ///
    /// Returns the first violation found as [`SspError::InvalidSolution`].
    pub fn verify(&self, incidence: &Incidence, capacity: usize) -> Result<()> {
        let n = incidence.num_jobs();
        let m = incidence.num_tools();
        if self.num_jobs != n || self.num_tools != m {
            return Err(violation(format!(
                "record is {}x{} but instance is {n}x{m}",
                self.num_jobs, self.num_tools
            )));
        }

        let mut job_at = vec![None; n];
        let mut jobs_seen = BTreeSet::new();
        for a in &self.assignments {
            if !(1..=n).contains(&a.job) || !(1..=n).contains(&a.position) {
                return Err(violation(format!(
                    "assignment U({},{}) out of range",
                    a.job, a.position
                )));
            }
            if job_at[a.position - 1].replace(a.job).is_some() {
                return Err(violation(format!("position {} holds two jobs", a.position)));
            }
            if !jobs_seen.insert(a.job) {
                return Err(violation(format!("job {} is scheduled twice", a.job)));
            }
        }

        let mut loadouts: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
        for p in &self.presence {
            if !(1..=n).contains(&p.position) || !(1..=m).contains(&p.tool) {
                return Err(violation(format!(
                    "presence V({},{}) out of range",
                    p.position, p.tool
                )));
            }
            loadouts[p.position - 1].insert(p.tool);
        }

        for (k, job) in job_at.iter().enumerate() {
            let Some(job) = *job else {
                return Err(violation(format!("position {} holds no job", k + 1)));
            };
            if let Some(tool) = incidence
                .tools_required_by(job)
                .iter()
                .find(|&&t| !loadouts[k].contains(&t))
            {
                return Err(violation(format!(
                    "job {job} at position {} needs tool {tool}, which is not present",
                    k + 1
                )));
            }
            if loadouts[k].len() > capacity {
                return Err(violation(format!(
                    "position {} holds {} tools, capacity is {capacity}",
                    k + 1,
                    loadouts[k].len()
                )));
            }
        }

        let switched: BTreeSet<(usize, usize)> =
            self.switches.iter().map(|s| (s.position, s.tool)).collect();
        for k in 1..n {
            for &tool in loadouts[k].difference(&loadouts[k - 1]) {
                if !switched.contains(&(k + 1, tool)) {
                    return Err(violation(format!(
                        "tool {tool} is inserted at position {} without a switch",
                        k + 1
                    )));
                }
            }
        }

        Ok(())
    }
}

fn violation(msg: String) -> SspError {
    SspError::InvalidSolution(msg)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::instance::IncidenceMatrix;
    use crate::solution::{ActiveAssignment, ActivePresence, ActiveSwitch, SolveDiagnostics};
    use crate::solver::SolverStatus;

    fn incidence() -> Incidence {
        let matrix = IncidenceMatrix::from_rows(vec![vec![1, 0], vec![0, 1], vec![1, 1]]).unwrap();
        Incidence::from_matrix(&matrix).unwrap()
    }

    fn record() -> SolutionRecord {
        SolutionRecord {
            num_jobs: 2,
            num_tools: 3,
            diagnostics: SolveDiagnostics {
                objective_value: 3.0,
                gap: 0.0,
                elapsed: Duration::ZERO,
                status: SolverStatus::Optimal,
                solver_name: "test".into(),
            },
            assignments: vec![
                ActiveAssignment { job: 1, position: 1 },
                ActiveAssignment { job: 2, position: 2 },
            ],
            presence: vec![
                ActivePresence { position: 1, tool: 1 },
                ActivePresence { position: 1, tool: 3 },
                ActivePresence { position: 2, tool: 2 },
                ActivePresence { position: 2, tool: 3 },
            ],
            switches: vec![ActiveSwitch { position: 2, tool: 2 }],
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(record().verify(&incidence(), 2).is_ok());
    }

    #[test]
    fn test_capacity_violation() {
        let err = record().verify(&incidence(), 1).unwrap_err();
        assert!(matches!(err, SspError::InvalidSolution(ref msg) if msg.contains("capacity")));
    }

    #[test]
    fn test_missing_tool() {
        let mut r = record();
        r.presence.retain(|p| !(p.position == 2 && p.tool == 3));
        let err = r.verify(&incidence(), 2).unwrap_err();
        assert!(matches!(err, SspError::InvalidSolution(ref msg) if msg.contains("needs tool 3")));
    }

    #[test]
    fn test_missing_switch() {
        let mut r = record();
        r.switches.clear();
        let err = r.verify(&incidence(), 2).unwrap_err();
        assert!(matches!(err, SspError::InvalidSolution(ref msg) if msg.contains("without a switch")));
    }

    #[test]
    fn test_duplicate_job() {
        let mut r = record();
        r.assignments[1].job = 1;
        let err = r.verify(&incidence(), 2).unwrap_err();
        assert!(matches!(err, SspError::InvalidSolution(ref msg) if msg.contains("twice")));
    }

    #[test]
    fn test_empty_position() {
        let mut r = record();
        r.assignments.pop();
        let err = r.verify(&incidence(), 2).unwrap_err();
        assert!(matches!(err, SspError::InvalidSolution(ref msg) if msg.contains("holds no job")));
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut r = record();
        r.num_tools = 4;
        assert!(r.verify(&incidence(), 2).is_err());
    }
}
