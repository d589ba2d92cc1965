//! Pipeline configuration.

use std::time::Duration;

use crate::solver::SolverConfig;

/// Configuration for one SSP solve.
///
/// # Examples
///
/// ```
/// use u_toolswitch::pipeline::SspConfig;
///
/// let config = SspConfig::new(3)
///     .with_time_limit_secs(120)
///     .with_verify(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SspConfig {
    /// Magazine capacity `C`. Must lie in `[1, number of tools]`.
    pub capacity: usize,

    /// Settings passed to the solver backend.
    pub solver: SolverConfig,

    /// Check the extracted record against the instance before returning it.
    pub verify: bool,
}

impl SspConfig {
    /// Creates a configuration for the given magazine capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            solver: SolverConfig::default(),
            verify: true,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.solver.time_limit = limit;
        self
    }

    pub fn with_time_limit_secs(mut self, secs: u64) -> Self {
        self.solver.time_limit = Duration::from_secs(secs);
        self
    }

    pub fn with_solver_config(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Validates the configuration.
    ///
    /// The upper bound on `capacity` depends on the instance and is checked
    /// when the model is built.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be positive".into());
        }
        self.solver.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = SspConfig::new(4);
        assert_eq!(config.capacity, 4);
        assert!(config.verify);
        assert_eq!(config.solver.time_limit, Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SspConfig::new(1)
            .with_capacity(2)
            .with_time_limit(Duration::from_millis(1500))
            .with_verify(false);
        assert_eq!(config.capacity, 2);
        assert_eq!(config.solver.time_limit, Duration::from_millis(1500));
        assert!(!config.verify);
    }

    #[test]
    fn test_zero_capacity() {
        assert!(SspConfig::new(0).validate().is_err());
    }

    #[test]
    fn test_zero_time_limit() {
        assert!(SspConfig::new(2).with_time_limit_secs(0).validate().is_err());
    }
}
