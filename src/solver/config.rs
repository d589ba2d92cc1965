//! Solver configuration.

use std::time::Duration;

/// Configuration passed to every [`MilpSolver`](super::MilpSolver) call.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_toolswitch::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_time_limit(Duration::from_secs(30))
///     .with_integrality_tolerance(1e-5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Wall-clock limit for a single solve.
    pub time_limit: Duration,

    /// Distance from 0 or 1 within which a binary value is accepted.
    pub integrality_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            integrality_tolerance: 1e-6,
        }
    }
}

impl SolverConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the time limit in whole seconds.
    pub fn with_time_limit_secs(mut self, secs: u64) -> Self {
        self.time_limit = Duration::from_secs(secs);
        self
    }

    pub fn with_integrality_tolerance(mut self, tolerance: f64) -> Self {
        self.integrality_tolerance = tolerance;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit.is_zero() {
            return Err("time_limit must be positive".into());
        }
        if !(self.integrality_tolerance > 0.0 && self.integrality_tolerance < 0.5) {
            return Err(format!(
                "integrality_tolerance must be in (0, 0.5), got {}",
                self.integrality_tolerance
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(60));
        assert!((config.integrality_tolerance - 1e-6).abs() < 1e-15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_time_limit() {
        let config = SolverConfig::default().with_time_limit_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_tolerance() {
        assert!(SolverConfig::default()
            .with_integrality_tolerance(0.0)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_integrality_tolerance(0.5)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_integrality_tolerance(f64::NAN)
            .validate()
            .is_err());
    }
}
