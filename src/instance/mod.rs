//! Problem instances.
//!
//! An SSP instance is a tool×job incidence matrix: entry `(t, j)` is 1 when
//! job `j` needs tool `t` loaded in the magazine while it runs.
//! [`IncidenceMatrix`] holds the raw values; [`Incidence`] is the validated
//! relation, stored in both directions (tools per job, jobs per tool).
//!
//! Jobs, tools, and positions are identified by 1-based ids throughout.

mod incidence;
mod matrix;

pub use incidence::Incidence;
pub use matrix::IncidenceMatrix;
