//! Tang–Denardo MILP for the job sequencing and tool switching problem.
//!
//! A machine processes `n` jobs one after another. Each job needs a set of
//! tools loaded in a magazine that holds at most `C` tools. The job
//! sequencing and tool switching problem (SSP) asks for the job order and
//! magazine contents that minimize the number of tool switches, assuming
//! every switch takes the same time.
//!
//! This crate provides the translation layer around an external MILP
//! solver:
//!
//! - **`instance`**: Incidence matrix validation and job/tool adjacency
//! - **`formulation`**: Tang–Denardo model construction (`U`, `V`, `W`
//!   variables, five constraint families, switch-count objective)
//! - **`model`**: Tagged binary variables and linear constraints
//! - **`solver`**: [`MilpSolver`](solver::MilpSolver) backend trait and a
//!   pure-Rust `microlp` backend
//! - **`solution`**: Structural extraction of active variables and solve
//!   diagnostics into a [`SolutionRecord`](solution::SolutionRecord)
//! - **`pipeline`**: One-call entry point, [`SspRunner`](pipeline::SspRunner)
//!
//! # Example
//!
//! ```
//! use u_toolswitch::instance::IncidenceMatrix;
//! use u_toolswitch::pipeline::{SspConfig, SspRunner};
//!
//! // rows = tools, columns = jobs
//! let matrix = IncidenceMatrix::from_rows(vec![
//!     vec![1, 0, 1],
//!     vec![0, 1, 1],
//!     vec![1, 1, 0],
//! ]).unwrap();
//!
//! let record = SspRunner::solve(&matrix, &SspConfig::new(2)).unwrap();
//! assert!(record.is_optimal());
//! assert_eq!(record.sequence().len(), 3);
//! ```
//!
//! # References
//!
//! - Tang & Denardo (1988), "Models Arising from a Flexible Manufacturing
//!   Machine, Part I: Minimization of the Number of Tool Switches"
//! - Calmels (2019), "The job sequencing and tool switching problem: state
//!   of the art literature review, classification, and trends"

pub mod error;
pub mod formulation;
pub mod instance;
pub mod model;
pub mod pipeline;
pub mod solution;
pub mod solver;

pub use error::{Result, SspError};
