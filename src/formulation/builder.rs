//! Tang–Denardo model construction.

use tracing::debug;

use crate::error::{Result, SspError};
use crate::instance::Incidence;
use crate::model::{
    ConstraintFamily, ConstraintSense, LinearConstraint, SspModel, SspVar, VarId,
};

/// Position whose tool loadout is charged in the objective.
///
/// The formulation charges the loadout of the second slot. A single-job
/// instance has no second slot, so the only position is used instead.
pub fn loadout_position(num_jobs: usize) -> usize {
    num_jobs.min(2)
}

/// Builds the Tang–Denardo model for an incidence relation and a magazine
/// capacity.
///
/// Variables, for jobs `j`, positions `k` and tools `t`:
/// - `U(j,k)` for every job and position
/// - `V(k,t)` for every position and tool
/// - `W(k,t)` for every position `k >= 2` and tool
///
/// Objective: minimize `sum_t V(2,t) + sum_{k>=2,t} W(k,t)`.
///
/// Constraints:
/// 1. `sum_j U(j,k) = 1` for every position
/// 2. `sum_k U(j,k) = 1` for every job
/// 3. `sum_{j needs t} U(j,k) - V(k,t) <= 0` for every position and tool
/// 4. `sum_t V(k,t) <= C` for every position
/// 5. `V(k,t) - V(k-1,t) - W(k,t) <= 0` for every `k >= 2` and tool
///
/// Family 5 only bounds `W` from below. The minimized objective keeps it
/// tight; the model is not meant for feasibility-only or maximizing use.
///
/// # Examples
///
/// ```
/// use u_toolswitch::formulation::TangDenardoBuilder;
/// use u_toolswitch::instance::{Incidence, IncidenceMatrix};
///
/// let matrix = IncidenceMatrix::from_rows(vec![vec![1, 0], vec![1, 1]]).unwrap();
/// let incidence = Incidence::from_matrix(&matrix).unwrap();
/// let model = TangDenardoBuilder::new(&incidence, 2).unwrap().build();
/// // 4 U + 4 V + 2 W
/// assert_eq!(model.num_vars(), 10);
/// ```
pub struct TangDenardoBuilder<'a> {
    incidence: &'a Incidence,
    capacity: usize,
}

impl<'a> TangDenardoBuilder<'a> {
    /// Creates a builder.
    ///
    /// # Errors
    ///
    /// [`SspError::InvalidInstance`] if `capacity` is zero or exceeds the
    /// number of tools.
    pub fn new(incidence: &'a Incidence, capacity: usize) -> Result<Self> {
        let num_tools = incidence.num_tools();
        if capacity == 0 || capacity > num_tools {
            return Err(SspError::InvalidInstance(format!(
                "magazine capacity must be in [1, {num_tools}], got {capacity}"
            )));
        }
        Ok(Self {
            incidence,
            capacity,
        })
    }

    /// Magazine capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Builds the model.
    pub fn build(&self) -> SspModel {
        let n = self.incidence.num_jobs();
        let m = self.incidence.num_tools();
        let mut model = SspModel::new("tang-denardo", n, m, self.capacity);

        // u[j][k], v[k][t], w[k][t], all 0-based
        let u: Vec<Vec<VarId>> = (1..=n)
            .map(|job| {
                (1..=n)
                    .map(|position| model.add_var(SspVar::Assignment { job, position }))
                    .collect()
            })
            .collect();
        let v: Vec<Vec<VarId>> = (1..=n)
            .map(|position| {
                (1..=m)
                    .map(|tool| model.add_var(SspVar::Presence { position, tool }))
                    .collect()
            })
            .collect();
        // w[0] stays empty: no switch into the first position.
        let w: Vec<Vec<VarId>> = (1..=n)
            .map(|position| {
                if position == 1 {
                    Vec::new()
                } else {
                    (1..=m)
                        .map(|tool| model.add_var(SspVar::Switch { position, tool }))
                        .collect()
                }
            })
            .collect();

        let loadout = loadout_position(n) - 1;
        for &var in &v[loadout] {
            model.add_objective_term(var, 1.0);
        }
        for row in w.iter().skip(1) {
            for &var in row {
                model.add_objective_term(var, 1.0);
            }
        }

        for k in 0..n {
            model.add_constraint(LinearConstraint {
                family: ConstraintFamily::AssignmentByPosition,
                terms: u.iter().map(|row| (row[k], 1.0)).collect(),
                sense: ConstraintSense::Eq,
                rhs: 1.0,
            });
        }

        for row in &u {
            model.add_constraint(LinearConstraint {
                family: ConstraintFamily::AssignmentByJob,
                terms: row.iter().map(|&var| (var, 1.0)).collect(),
                sense: ConstraintSense::Eq,
                rhs: 1.0,
            });
        }

        for k in 0..n {
            for t in 0..m {
                let mut terms: Vec<(VarId, f64)> = self
                    .incidence
                    .jobs_requiring(t + 1)
                    .iter()
                    .map(|&job| (u[job - 1][k], 1.0))
                    .collect();
                terms.push((v[k][t], -1.0));
                model.add_constraint(LinearConstraint {
                    family: ConstraintFamily::ToolPresence,
                    terms,
                    sense: ConstraintSense::Le,
                    rhs: 0.0,
                });
            }
        }

        for row in &v {
            model.add_constraint(LinearConstraint {
                family: ConstraintFamily::MagazineCapacity,
                terms: row.iter().map(|&var| (var, 1.0)).collect(),
                sense: ConstraintSense::Le,
                rhs: self.capacity as f64,
            });
        }

        for k in 1..n {
            for t in 0..m {
                model.add_constraint(LinearConstraint {
                    family: ConstraintFamily::SwitchDetection,
                    terms: vec![(v[k][t], 1.0), (v[k - 1][t], -1.0), (w[k][t], -1.0)],
                    sense: ConstraintSense::Le,
                    rhs: 0.0,
                });
            }
        }

        let stats = model.stats();
        debug!(
            jobs = n,
            tools = m,
            capacity = self.capacity,
            vars = stats.num_vars(),
            constraints = stats.num_constraints(),
            tool_presence = stats.tool_presence,
            switch_detection = stats.switch_detection,
            "built tang-denardo model"
        );

        model
    }
}
