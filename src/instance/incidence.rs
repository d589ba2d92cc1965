//! Job/tool adjacency derived from an incidence matrix.

use std::collections::BTreeSet;

use super::matrix::IncidenceMatrix;
use crate::error::{Result, SspError};

/// Validated incidence relation between jobs and tools.
///
/// Holds both directions of the relation as arrays of sets indexed by
/// `id - 1`. All public accessors take and return 1-based ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incidence {
    tools_required_by_job: Vec<BTreeSet<usize>>,
    jobs_requiring_tool: Vec<BTreeSet<usize>>,
}

impl Incidence {
    /// Builds the incidence maps from a raw matrix.
    ///
    /// # Errors
    ///
    /// [`SspError::InvalidInstance`] if any entry is not 0 or 1, if a tool
    /// is required by no job, or if a job requires no tool.
    pub fn from_matrix(matrix: &IncidenceMatrix) -> Result<Self> {
        let num_tools = matrix.num_tools();
        let num_jobs = matrix.num_jobs();

        let mut tools_required_by_job = vec![BTreeSet::new(); num_jobs];
        let mut jobs_requiring_tool = vec![BTreeSet::new(); num_tools];

        for (t, row) in matrix.rows().iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => {
                        jobs_requiring_tool[t].insert(j + 1);
                        tools_required_by_job[j].insert(t + 1);
                    }
                    other => {
                        return Err(SspError::InvalidInstance(format!(
                            "entry (tool {}, job {}) is {other}, expected 0 or 1",
                            t + 1,
                            j + 1
                        )));
                    }
                }
            }
        }

        if let Some(t) = jobs_requiring_tool.iter().position(BTreeSet::is_empty) {
            return Err(SspError::InvalidInstance(format!(
                "tool {} is not required by any job",
                t + 1
            )));
        }
        if let Some(j) = tools_required_by_job.iter().position(BTreeSet::is_empty) {
            return Err(SspError::InvalidInstance(format!(
                "job {} requires no tool",
                j + 1
            )));
        }

        let incidence = Self {
            tools_required_by_job,
            jobs_requiring_tool,
        };
        debug_assert!(incidence.is_consistent());
        Ok(incidence)
    }

    /// Number of jobs (and positions).
    pub fn num_jobs(&self) -> usize {
        self.tools_required_by_job.len()
    }

    /// Number of tools.
    pub fn num_tools(&self) -> usize {
        self.jobs_requiring_tool.len()
    }

    /// Tools required by `job`. Panics if `job` is out of range.
    pub fn tools_required_by(&self, job: usize) -> &BTreeSet<usize> {
        &self.tools_required_by_job[job - 1]
    }

    /// Jobs requiring `tool`. Panics if `tool` is out of range.
    pub fn jobs_requiring(&self, tool: usize) -> &BTreeSet<usize> {
        &self.jobs_requiring_tool[tool - 1]
    }

    /// Whether `job` requires `tool`. Out-of-range ids yield `false`.
    pub fn requires(&self, job: usize, tool: usize) -> bool {
        job.checked_sub(1)
            .and_then(|j| self.tools_required_by_job.get(j))
            .is_some_and(|tools| tools.contains(&tool))
    }

    /// Largest tool requirement set over all jobs.
    ///
    /// A magazine smaller than this cannot hold the tools of that job.
    pub fn max_tools_per_job(&self) -> usize {
        self.tools_required_by_job
            .iter()
            .map(BTreeSet::len)
            .max()
            .unwrap_or(0)
    }

    /// Total number of job/tool incidences.
    pub fn num_incidences(&self) -> usize {
        self.tools_required_by_job.iter().map(BTreeSet::len).sum()
    }

    /// Checks that both maps describe the same relation.
    pub fn is_consistent(&self) -> bool {
        let forward = self
            .tools_required_by_job
            .iter()
            .enumerate()
            .all(|(j, tools)| {
                tools.iter().all(|&t| {
                    self.jobs_requiring_tool
                        .get(t - 1)
                        .is_some_and(|jobs| jobs.contains(&(j + 1)))
                })
            });
        let backward = self
            .jobs_requiring_tool
            .iter()
            .enumerate()
            .all(|(t, jobs)| {
                jobs.iter().all(|&j| {
                    self.tools_required_by_job
                        .get(j - 1)
                        .is_some_and(|tools| tools.contains(&(t + 1)))
                })
            });
        forward && backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> IncidenceMatrix {
        IncidenceMatrix::from_rows(vec![
            vec![1, 1, 0, 0, 1],
            vec![1, 0, 0, 1, 0],
            vec![0, 1, 1, 1, 0],
            vec![1, 0, 1, 0, 1],
            vec![0, 0, 1, 1, 0],
            vec![0, 0, 0, 0, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_maps() {
        let inc = Incidence::from_matrix(&reference()).unwrap();
        assert_eq!(inc.num_jobs(), 5);
        assert_eq!(inc.num_tools(), 6);

        let job1: Vec<usize> = inc.tools_required_by(1).iter().copied().collect();
        assert_eq!(job1, vec![1, 2, 4]);
        let job5: Vec<usize> = inc.tools_required_by(5).iter().copied().collect();
        assert_eq!(job5, vec![1, 4, 6]);

        let tool3: Vec<usize> = inc.jobs_requiring(3).iter().copied().collect();
        assert_eq!(tool3, vec![2, 3, 4]);
        let tool6: Vec<usize> = inc.jobs_requiring(6).iter().copied().collect();
        assert_eq!(tool6, vec![5]);

        assert!(inc.requires(4, 5));
        assert!(!inc.requires(1, 3));
        assert!(!inc.requires(0, 1));
        assert!(!inc.requires(9, 1));
        assert!(inc.is_consistent());
    }

    #[test]
    fn test_counts() {
        let inc = Incidence::from_matrix(&reference()).unwrap();
        assert_eq!(inc.max_tools_per_job(), 3);
        assert_eq!(inc.num_incidences(), 14);
    }

    #[test]
    fn test_non_binary_entry() {
        let m = IncidenceMatrix::from_rows(vec![vec![1, 0], vec![2, 1]]).unwrap();
        let err = Incidence::from_matrix(&m).unwrap_err();
        assert!(matches!(err, SspError::InvalidInstance(ref msg) if msg.contains("tool 2, job 1")));
    }

    #[test]
    fn test_negative_entry() {
        let m = IncidenceMatrix::from_rows(vec![vec![1, -1]]).unwrap();
        assert!(Incidence::from_matrix(&m).is_err());
    }

    #[test]
    fn test_unused_tool() {
        let m = IncidenceMatrix::from_rows(vec![vec![1, 1], vec![0, 0]]).unwrap();
        let err = Incidence::from_matrix(&m).unwrap_err();
        assert_eq!(
            err,
            SspError::InvalidInstance("tool 2 is not required by any job".into())
        );
    }

    #[test]
    fn test_job_without_tools() {
        let m = IncidenceMatrix::from_rows(vec![vec![1, 0], vec![1, 0]]).unwrap();
        let err = Incidence::from_matrix(&m).unwrap_err();
        assert_eq!(err, SspError::InvalidInstance("job 2 requires no tool".into()));
    }

    #[test]
    fn test_single_job() {
        let m = IncidenceMatrix::from_rows(vec![vec![1], vec![1]]).unwrap();
        let inc = Incidence::from_matrix(&m).unwrap();
        assert_eq!(inc.num_jobs(), 1);
        assert_eq!(inc.tools_required_by(1).len(), 2);
    }
}
