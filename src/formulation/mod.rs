//! Tang–Denardo formulation of the tool switching problem.
//!
//! Translates a validated [`Incidence`](crate::instance::Incidence) and a
//! magazine capacity into an [`SspModel`](crate::model::SspModel) with
//! assignment (`U`), presence (`V`) and switch (`W`) variables, five
//! constraint families, and a switch-count objective under uniform setup
//! time.
//!
//! # References
//!
//! - Tang & Denardo (1988), "Models Arising from a Flexible Manufacturing
//!   Machine, Part I: Minimization of the Number of Tool Switches"

mod builder;

pub use builder::{loadout_position, TangDenardoBuilder};
