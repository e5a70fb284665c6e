use thiserror::Error;

/// Configuration for the safeguarded Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Absolute step tolerance: the solver stops once the magnitude of
    /// the last step falls below this value.
    pub abs_tol: f64,

    /// Maximum number of function evaluations, including the three spent
    /// validating the bracket and seeding the iterate.
    pub max_evals: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("abs_tol must be finite and positive")]
    AbsTol,

    #[error("max_evals must be positive")]
    MaxEvals,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            abs_tol: 1e-10,
            max_evals: 100,
        }
    }
}

impl Config {
    /// Validates the tolerance and evaluation budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `abs_tol` is not finite and positive, or if
    /// `max_evals` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.abs_tol.is_finite() || self.abs_tol <= 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if self.max_evals == 0 {
            return Err(ConfigError::MaxEvals);
        }
        Ok(())
    }
}
