//! Extracted solution record.

use std::time::Duration;

use crate::formulation::loadout_position;
use crate::solver::SolverStatus;

/// Active `U(job, position)`: `job` runs at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveAssignment {
    /// Job id, 1-based.
    pub job: usize,
    /// Position in the sequence, 1-based.
    pub position: usize,
}

/// Active `V(position, tool)`: `tool` is resident at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivePresence {
    /// Position in the sequence, 1-based.
    pub position: usize,
    /// Resident tool id, 1-based.
    pub tool: usize,
}

/// Active `W(position, tool)`: `tool` is switched in before `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSwitch {
    /// Position the tool is switched in for, at least 2.
    pub position: usize,
    /// Inserted tool id, 1-based.
    pub tool: usize,
}

/// Objective, gap, runtime and status of one solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveDiagnostics {
    /// Objective value reported by the solver.
    pub objective_value: f64,
    /// Relative optimality gap.
    pub gap: f64,
    /// Wall-clock solve time.
    pub elapsed: Duration,
    /// Solver status.
    pub status: SolverStatus,
    /// Backend that produced the solution.
    pub solver_name: String,
}

/// Typed result of a solve.
///
/// Holds the diagnostics reported by the backend and the three active
/// variable sets. Assignments are ordered by position; presence and switch
/// entries by `(position, tool)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionRecord {
    pub(crate) num_jobs: usize,
    pub(crate) num_tools: usize,
    pub(crate) diagnostics: SolveDiagnostics,
    pub(crate) assignments: Vec<ActiveAssignment>,
    pub(crate) presence: Vec<ActivePresence>,
    pub(crate) switches: Vec<ActiveSwitch>,
}

impl SolutionRecord {
    /// Objective value reported by the solver.
    pub fn objective_value(&self) -> f64 {
        self.diagnostics.objective_value
    }

    /// Relative optimality gap; 0 when optimality was proven.
    pub fn gap(&self) -> f64 {
        self.diagnostics.gap
    }

    /// Wall-clock solve time.
    pub fn elapsed(&self) -> Duration {
        self.diagnostics.elapsed
    }

    /// Raw solver status.
    pub fn status(&self) -> SolverStatus {
        self.diagnostics.status
    }

    pub fn solver_name(&self) -> &str {
        &self.diagnostics.solver_name
    }

    pub fn diagnostics(&self) -> &SolveDiagnostics {
        &self.diagnostics
    }

    /// Whether the solver proved this solution optimal.
    pub fn is_optimal(&self) -> bool {
        self.diagnostics.status == SolverStatus::Optimal && self.diagnostics.gap <= 1e-9
    }

    /// Number of jobs (and positions) in the instance.
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Number of tools in the instance.
    pub fn num_tools(&self) -> usize {
        self.num_tools
    }

    /// Active assignment variables, by position.
    pub fn assignments(&self) -> &[ActiveAssignment] {
        &self.assignments
    }

    /// Active presence variables, by `(position, tool)`.
    pub fn presence(&self) -> &[ActivePresence] {
        &self.presence
    }

    /// Active switch variables, by `(position, tool)`.
    pub fn switches(&self) -> &[ActiveSwitch] {
        &self.switches
    }

    /// Job sequence in position order.
    ///
    /// Only meaningful for a verified record; positions without an active
    /// assignment are skipped.
    pub fn sequence(&self) -> Vec<usize> {
        self.assignments.iter().map(|a| a.job).collect()
    }

    /// Job at a position, if any.
    pub fn job_at(&self, position: usize) -> Option<usize> {
        self.assignments
            .iter()
            .find(|a| a.position == position)
            .map(|a| a.job)
    }

    /// Tools resident at a position, ascending.
    pub fn loadout(&self, position: usize) -> Vec<usize> {
        self.presence
            .iter()
            .filter(|p| p.position == position)
            .map(|p| p.tool)
            .collect()
    }

    /// Tools switched in before a position, ascending.
    pub fn switched_in(&self, position: usize) -> Vec<usize> {
        self.switches
            .iter()
            .filter(|s| s.position == position)
            .map(|s| s.tool)
            .collect()
    }

    /// Total number of switch events.
    pub fn switch_count(&self) -> usize {
        self.switches.len()
    }

    /// Recomputes the objective from the active sets.
    ///
    /// Initial loadout size plus the number of switch events.
    pub fn rescore(&self) -> usize {
        let loadout = self.loadout(loadout_position(self.num_jobs)).len();
        let switches = self.switches.iter().filter(|s| s.position >= 2).count();
        loadout + switches
    }
}
