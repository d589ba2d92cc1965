//! Solver adapters.
//!
//! The core never solves anything itself. It hands a finished
//! [`SspModel`](crate::model::SspModel) to a [`MilpSolver`] together with a
//! [`SolverConfig`] and consumes a [`RawSolution`]: objective value, gap,
//! elapsed time, and one value per declared variable.
//!
//! # Key Components
//!
//! - **Trait**: [`MilpSolver`] — interface for backend implementations
//! - **Config**: [`SolverConfig`] — time limit and integrality tolerance
//! - **Backend**: [`MicroLpSolver`] — pure-Rust `microlp` backend
//!
//! Backends are plain values passed into each call. There is no global
//! solver state, so independent solves may run concurrently.

mod config;
mod microlp_backend;
mod types;

pub use config::SolverConfig;
pub use microlp_backend::MicroLpSolver;
pub use types::{MilpSolver, RawSolution, SolverStatus};
