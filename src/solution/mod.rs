//! Solution extraction.
//!
//! Turns a backend's [`RawSolution`](crate::solver::RawSolution) into a
//! [`SolutionRecord`]: the active assignment, presence and switch entries
//! plus the solve diagnostics. Variables are classified by their
//! [`SspVar`](crate::model::SspVar) tag, so the record never depends on how
//! a backend names its columns.

mod extract;
mod record;
mod verify;

pub use extract::extract;
pub use record::{ActiveAssignment, ActivePresence, ActiveSwitch, SolutionRecord, SolveDiagnostics};
