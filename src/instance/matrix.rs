//! Raw tool–job incidence matrix.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SspError};

/// An m×n tool–job matrix as supplied by the caller.
///
/// Rows are tools, columns are jobs. Entry `(t, j)` should be `1` when
/// job `j` requires tool `t` and `0` otherwise. Values are stored as given;
/// binary-ness and non-degenerate rows/columns are checked when the matrix
/// is turned into an [`Incidence`](super::Incidence).
///
/// # Examples
///
/// ```
/// use u_toolswitch::instance::IncidenceMatrix;
///
/// let matrix = IncidenceMatrix::from_rows(vec![
///     vec![1, 0, 1],
///     vec![0, 1, 1],
/// ]).unwrap();
/// assert_eq!(matrix.num_tools(), 2);
/// assert_eq!(matrix.num_jobs(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct IncidenceMatrix {
    rows: Vec<Vec<i32>>,
}

impl IncidenceMatrix {
    /// Creates a matrix from tool rows.
    ///
    /// Fails if the matrix has no rows, no columns, or rows of differing
    /// length.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(SspError::InvalidInstance("matrix has no tool rows".into()));
        };
        let width = first.len();
        if width == 0 {
            return Err(SspError::InvalidInstance("matrix has no job columns".into()));
        }
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(SspError::InvalidInstance(format!(
                "tool row {} has {} entries, expected {width}",
                idx + 1,
                row.len()
            )));
        }
        Ok(Self { rows })
    }

    /// Generates a random valid instance.
    ///
    /// Each entry is 1 with probability `density`. Afterwards every job
    /// without a tool and every tool without a job receives one random
    /// incidence, so the result always passes validation.
    pub fn random(num_tools: usize, num_jobs: usize, density: f64, seed: u64) -> Result<Self> {
        if num_tools == 0 || num_jobs == 0 {
            return Err(SspError::InvalidInstance(
                "random instance needs at least one tool and one job".into(),
            ));
        }
        if !(0.0..=1.0).contains(&density) {
            return Err(SspError::InvalidInstance(format!(
                "density must be in [0, 1], got {density}"
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut rows: Vec<Vec<i32>> = (0..num_tools)
            .map(|_| {
                (0..num_jobs)
                    .map(|_| i32::from(rng.random_bool(density)))
                    .collect()
            })
            .collect();

        for job in 0..num_jobs {
            if rows.iter().all(|row| row[job] == 0) {
                let tool = rng.random_range(0..num_tools);
                rows[tool][job] = 1;
            }
        }
        for row in rows.iter_mut() {
            if row.iter().all(|&v| v == 0) {
                let job = rng.random_range(0..num_jobs);
                row[job] = 1;
            }
        }

        Ok(Self { rows })
    }

    /// Number of tools (rows).
    pub fn num_tools(&self) -> usize {
        self.rows.len()
    }

    /// Number of jobs (columns).
    pub fn num_jobs(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Raw entry for a 1-based tool and job id.
    ///
    /// Returns `None` when either id is out of range.
    pub fn get(&self, tool: usize, job: usize) -> Option<i32> {
        let row = self.rows.get(tool.checked_sub(1)?)?;
        row.get(job.checked_sub(1)?).copied()
    }

    /// Tool rows, 0-based.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<i32>>> for IncidenceMatrix {
    type Error = SspError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<IncidenceMatrix> for Vec<Vec<i32>> {
    fn from(matrix: IncidenceMatrix) -> Self {
        matrix.rows
    }
}
