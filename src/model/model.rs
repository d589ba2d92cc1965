//! Linear model container handed to solver backends.

use super::variables::{SspVar, VarId, VarRole};

/// Constraint family of the Tang–Denardo formulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintFamily {
    /// Every position holds exactly one job.
    AssignmentByPosition,
    /// Every job occupies exactly one position.
    AssignmentByJob,
    /// A tool needed at a position must be resident there.
    ToolPresence,
    /// At most `C` tools resident per position.
    MagazineCapacity,
    /// A tool present at `k` but not at `k-1` counts as a switch.
    SwitchDetection,
}

impl ConstraintFamily {
    /// All families in emission order.
    pub const ALL: [ConstraintFamily; 5] = [
        ConstraintFamily::AssignmentByPosition,
        ConstraintFamily::AssignmentByJob,
        ConstraintFamily::ToolPresence,
        ConstraintFamily::MagazineCapacity,
        ConstraintFamily::SwitchDetection,
    ];
}

/// Relation between the left-hand side and the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintSense {
    /// `lhs <= rhs`
    Le,
    /// `lhs == rhs`
    Eq,
}

/// A linear constraint `sum(coef * var) <sense> rhs`.
///
/// A variable appears at most once in `terms`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// Family this row belongs to.
    pub family: ConstraintFamily,
    /// `(variable, coefficient)` pairs.
    pub terms: Vec<(VarId, f64)>,
    /// Comparison sense.
    pub sense: ConstraintSense,
    /// Right-hand side constant.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Evaluates the constraint against a full assignment indexed by [`VarId`].
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs: f64 = self
            .terms
            .iter()
            .map(|&(var, coef)| coef * values[var.index()])
            .sum();
        match self.sense {
            ConstraintSense::Le => lhs <= self.rhs + tolerance,
            ConstraintSense::Eq => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// Variable and constraint counts per family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelStats {
    /// Number of `U(j,k)` variables.
    pub assignment_vars: usize,
    /// Number of `V(k,t)` variables.
    pub presence_vars: usize,
    /// Number of `W(k,t)` variables.
    pub switch_vars: usize,
    /// One-job-per-position rows.
    pub assignment_by_position: usize,
    /// One-position-per-job rows.
    pub assignment_by_job: usize,
    /// Required-tool presence rows.
    pub tool_presence: usize,
    /// Magazine capacity rows.
    pub magazine_capacity: usize,
    /// Switch detection rows.
    pub switch_detection: usize,
}

impl ModelStats {
    /// Total number of declared variables.
    pub fn num_vars(&self) -> usize {
        self.assignment_vars + self.presence_vars + self.switch_vars
    }

    /// Total number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.assignment_by_position
            + self.assignment_by_job
            + self.tool_presence
            + self.magazine_capacity
            + self.switch_detection
    }

    /// Number of constraints in `family`.
    pub fn constraints_in(&self, family: ConstraintFamily) -> usize {
        match family {
            ConstraintFamily::AssignmentByPosition => self.assignment_by_position,
            ConstraintFamily::AssignmentByJob => self.assignment_by_job,
            ConstraintFamily::ToolPresence => self.tool_presence,
            ConstraintFamily::MagazineCapacity => self.magazine_capacity,
            ConstraintFamily::SwitchDetection => self.switch_detection,
        }
    }
}

/// A binary minimization model over tagged SSP variables.
///
/// Built once by the formulation builder, read by a solver backend, and
/// then read again by the extractor. All variables are binary and the
/// objective sense is always minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct SspModel {
    name: String,
    num_jobs: usize,
    num_tools: usize,
    capacity: usize,
    variables: Vec<SspVar>,
    objective: Vec<(VarId, f64)>,
    constraints: Vec<LinearConstraint>,
}

impl SspModel {
    /// Creates an empty model for the given dimensions.
    pub fn new(name: impl Into<String>, num_jobs: usize, num_tools: usize, capacity: usize) -> Self {
        Self {
            name: name.into(),
            num_jobs,
            num_tools,
            capacity,
            variables: Vec::new(),
            objective: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Declares a binary variable and returns its id.
    pub fn add_var(&mut self, var: SspVar) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(var);
        id
    }

    /// Adds a term to the (minimized) objective.
    pub fn add_objective_term(&mut self, var: VarId, coef: f64) {
        self.objective.push((var, coef));
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of jobs (and positions).
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Number of tools.
    pub fn num_tools(&self) -> usize {
        self.num_tools
    }

    /// Magazine capacity the model was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Declared variables, indexed by [`VarId::index`].
    pub fn variables(&self) -> &[SspVar] {
        &self.variables
    }

    /// Tag of a declared variable.
    pub fn var(&self, id: VarId) -> Option<&SspVar> {
        self.variables.get(id.index())
    }

    /// Objective terms.
    pub fn objective(&self) -> &[(VarId, f64)] {
        &self.objective
    }

    /// Constraints.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Number of declared variables.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Objective coefficient of every variable, indexed by [`VarId`].
    ///
    /// Repeated terms for the same variable are summed.
    pub fn objective_coefficients(&self) -> Vec<f64> {
        let mut coefs = vec![0.0; self.variables.len()];
        for &(var, coef) in &self.objective {
            coefs[var.index()] += coef;
        }
        coefs
    }

    /// Evaluates the objective for a full assignment indexed by [`VarId`].
    pub fn evaluate_objective(&self, values: &[f64]) -> f64 {
        self.objective
            .iter()
            .map(|&(var, coef)| coef * values[var.index()])
            .sum()
    }

    /// Counts variables and constraints per family.
    pub fn stats(&self) -> ModelStats {
        let mut stats = ModelStats::default();
        for var in &self.variables {
            match var.role() {
                VarRole::Assignment => stats.assignment_vars += 1,
                VarRole::Presence => stats.presence_vars += 1,
                VarRole::Switch => stats.switch_vars += 1,
            }
        }
        for c in &self.constraints {
            match c.family {
                ConstraintFamily::AssignmentByPosition => stats.assignment_by_position += 1,
                ConstraintFamily::AssignmentByJob => stats.assignment_by_job += 1,
                ConstraintFamily::ToolPresence => stats.tool_presence += 1,
                ConstraintFamily::MagazineCapacity => stats.magazine_capacity += 1,
                ConstraintFamily::SwitchDetection => stats.switch_detection += 1,
            }
        }
        stats
    }

    /// Validates the model for consistency.
    ///
    /// Checks that every objective and constraint term references a
    /// declared variable and that no constraint repeats a variable.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.variables.len();
        for &(var, _) in &self.objective {
            if var.index() >= n {
                return Err(format!("objective references undeclared variable #{}", var.index()));
            }
        }
        for (idx, c) in self.constraints.iter().enumerate() {
            let mut seen = std::collections::HashSet::with_capacity(c.terms.len());
            for &(var, _) in &c.terms {
                if var.index() >= n {
                    return Err(format!(
                        "constraint #{idx} ({:?}) references undeclared variable #{}",
                        c.family,
                        var.index()
                    ));
                }
                if !seen.insert(var) {
                    return Err(format!(
                        "constraint #{idx} ({:?}) repeats {}",
                        c.family, self.variables[var.index()]
                    ));
                }
            }
        }
        Ok(())
    }
}
