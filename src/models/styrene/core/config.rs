use thiserror::Error;

/// Configuration for the recycle and production-rate convergence loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceConfig {
    recycle_tol: f64,
    max_recycle_iters: usize,
    production_rel_tol: f64,
    feed_step: f64,
    max_production_iters: usize,
    initial_basis: f64,
    initial_recycle: f64,
}

/// Errors that can occur when validating a [`ConvergenceConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("recycle_tol must be finite and positive")]
    RecycleTol,

    #[error("production_rel_tol must be finite and positive")]
    ProductionTol,

    #[error("feed_step must be finite and positive")]
    FeedStep,

    #[error("initial guesses must be finite and non-negative")]
    InitialGuess,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            recycle_tol: 1e-5,
            max_recycle_iters: 10_000,
            production_rel_tol: 1e-5,
            feed_step: 1.0,
            max_production_iters: 2_000_000,
            initial_basis: 50_000.0,
            initial_recycle: 100.0,
        }
    }
}

impl ConvergenceConfig {
    /// Creates a config with validated tolerances and step.
    ///
    /// Initial guesses and iteration ceilings take their default values and
    /// can be changed with the `with_*` builders.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance or the step is not finite and positive.
    pub fn new(
        recycle_tol: f64,
        production_rel_tol: f64,
        feed_step: f64,
    ) -> Result<Self, ConfigError> {
        if !recycle_tol.is_finite() || recycle_tol <= 0.0 {
            return Err(ConfigError::RecycleTol);
        }
        if !production_rel_tol.is_finite() || production_rel_tol <= 0.0 {
            return Err(ConfigError::ProductionTol);
        }
        if !feed_step.is_finite() || feed_step <= 0.0 {
            return Err(ConfigError::FeedStep);
        }

        Ok(Self {
            recycle_tol,
            production_rel_tol,
            feed_step,
            ..Self::default()
        })
    }

    /// Returns this config with new iteration ceilings.
    #[must_use]
    pub fn with_max_iters(self, max_recycle_iters: usize, max_production_iters: usize) -> Self {
        Self {
            max_recycle_iters,
            max_production_iters,
            ..self
        }
    }

    /// Returns this config with a new starting feed basis and recycle guess.
    ///
    /// # Errors
    ///
    /// Returns an error if either guess is negative or not finite.
    pub fn with_initial_guess(self, basis: f64, recycle: f64) -> Result<Self, ConfigError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(basis) || !valid(recycle) {
            return Err(ConfigError::InitialGuess);
        }
        Ok(Self {
            initial_basis: basis,
            initial_recycle: recycle,
            ..self
        })
    }

    /// Relative tolerance on `recycle / unreacted EB - 1`.
    #[must_use]
    pub fn recycle_tol(&self) -> f64 {
        self.recycle_tol
    }

    #[must_use]
    pub fn max_recycle_iters(&self) -> usize {
        self.max_recycle_iters
    }

    /// Tolerance on styrene production, relative to the target.
    #[must_use]
    pub fn production_rel_tol(&self) -> f64 {
        self.production_rel_tol
    }

    /// Fixed feed-basis adjustment per production iteration, mol/hr.
    #[must_use]
    pub fn feed_step(&self) -> f64 {
        self.feed_step
    }

    #[must_use]
    pub fn max_production_iters(&self) -> usize {
        self.max_production_iters
    }

    /// Starting raw feed basis for each trial, mol/hr.
    #[must_use]
    pub fn initial_basis(&self) -> f64 {
        self.initial_basis
    }

    /// Starting recycled ethylbenzene for each trial, mol/hr.
    #[must_use]
    pub fn initial_recycle(&self) -> f64 {
        self.initial_recycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tolerances() {
        let config = ConvergenceConfig::default();
        assert_eq!(config.recycle_tol(), 1e-5);
        assert_eq!(config.production_rel_tol(), 1e-5);
        assert_eq!(config.feed_step(), 1.0);
        assert_eq!(config.initial_basis(), 50_000.0);
        assert_eq!(config.initial_recycle(), 100.0);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            ConvergenceConfig::new(0.0, 1e-5, 1.0),
            Err(ConfigError::RecycleTol)
        );
        assert_eq!(
            ConvergenceConfig::new(1e-5, f64::NAN, 1.0),
            Err(ConfigError::ProductionTol)
        );
        assert_eq!(
            ConvergenceConfig::new(1e-5, 1e-5, -1.0),
            Err(ConfigError::FeedStep)
        );
        assert_eq!(
            ConvergenceConfig::default().with_initial_guess(-1.0, 0.0),
            Err(ConfigError::InitialGuess)
        );
    }

    #[test]
    fn builders_override_defaults() {
        let config = ConvergenceConfig::new(1e-6, 1e-4, 10.0)
            .unwrap()
            .with_max_iters(5, 7)
            .with_initial_guess(90_000.0, 0.0)
            .unwrap();

        assert_eq!(config.recycle_tol(), 1e-6);
        assert_eq!(config.production_rel_tol(), 1e-4);
        assert_eq!(config.feed_step(), 10.0);
        assert_eq!(config.max_recycle_iters(), 5);
        assert_eq!(config.max_production_iters(), 7);
        assert_eq!(config.initial_basis(), 90_000.0);
    }
}
