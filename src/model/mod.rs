//! MILP model layer.
//!
//! Defines the closed model that sits between the formulation builder and
//! a solver backend: binary variables tagged with their role and indices,
//! linear constraints tagged with their family, and a minimized linear
//! objective.
//!
//! # Key Components
//!
//! - **Variables**: [`SspVar`] — `U(j,k)`, `V(k,t)`, `W(k,t)` handles
//! - **Constraints**: [`LinearConstraint`] tagged by [`ConstraintFamily`]
//! - **Model**: [`SspModel`] — container for variables, constraints, objective
//!
//! This is deliberately not a general MILP modeling API: every variable is
//! binary and every variable belongs to one of the three SSP families.

#[allow(clippy::module_inception)]
mod model;
mod variables;

pub use model::{ConstraintFamily, ConstraintSense, LinearConstraint, ModelStats, SspModel};
pub use variables::{SspVar, VarId, VarRole};
