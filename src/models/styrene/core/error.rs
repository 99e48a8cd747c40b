use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::DomainError;

/// Errors from the recycle and production-rate convergence loops.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConvergenceError {
    /// The equilibrium model was evaluated outside its domain.
    #[error("equilibrium model failed")]
    Domain(#[from] DomainError),

    /// The recycle loop reached its iteration limit.
    #[error("recycle loop hit iteration limit: ratio_error={ratio_error}")]
    RecycleMaxIters {
        /// Last value of `|recycle / unreacted EB - 1|`.
        ratio_error: f64,

        /// Iteration count performed by the loop.
        iters: usize,
    },

    /// The recycle ratio could not be evaluated.
    ///
    /// Happens when the unreacted ethylbenzene is zero.
    #[error("recycle ratio is not finite: recycle={recycle}, unreacted={unreacted}")]
    RecycleNotFinite { recycle: f64, unreacted: f64 },

    /// Unreacted ethylbenzene leaving the reactor went negative.
    #[error("unreacted ethylbenzene is negative: {value} mol/hr")]
    NegativeUnreacted { value: f64 },

    /// A production step would drive the raw feed basis negative.
    #[error("feed basis would become negative: {value} mol/hr")]
    NegativeBasis { value: f64 },

    /// The production-rate loop reached its iteration limit.
    #[error("production loop hit iteration limit: styrene={styrene}, target={target}")]
    ProductionMaxIters {
        /// Styrene production at the last iteration, mol/hr.
        styrene: f64,

        /// Target styrene production, mol/hr.
        target: f64,

        /// Iteration count performed by the loop.
        iters: usize,
    },
}

/// Errors that invalidate a single operating-condition trial.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TrialError {
    /// The operating condition cannot build a valid reactor feed.
    #[error("invalid operating condition")]
    InvalidCondition(#[from] ConstraintError),

    /// The equilibrium model is undefined at the operating condition.
    #[error("equilibrium model failed")]
    Domain(#[from] DomainError),

    /// A convergence loop failed.
    #[error("convergence failed")]
    Convergence(#[from] ConvergenceError),
}
