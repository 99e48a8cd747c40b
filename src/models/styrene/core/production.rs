//! Production-rate convergence.
//!
//! The raw feed basis is walked in fixed steps until styrene production
//! matches the target, re-converging the recycle after every step. The step
//! is not proportional to the error, so the iteration count grows with the
//! distance between the starting basis and the solution.

use tracing::debug;

use super::{
    ConvergenceConfig, ConvergenceError, Equilibrium, ProductionTarget, ReactorState,
    converge_recycle,
};

/// Iteration counts from a converged trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvergenceStats {
    /// Feed-basis adjustments made by the production loop.
    pub production_iters: usize,

    /// Recycle substitutions summed over every recycle convergence.
    pub recycle_iters: usize,
}

/// Adjusts the raw feed basis until styrene production meets the target.
///
/// The recycle is converged first, then the basis moves by `feed_step`
/// toward the target until `|target - styrene| <= target · production_rel_tol`.
///
/// # Errors
///
/// Returns a [`ConvergenceError`] if a recycle convergence fails, the basis
/// would become negative, or the loop reaches `max_production_iters`.
pub fn converge_production(
    state: &mut ReactorState,
    equilibrium: &Equilibrium,
    target: ProductionTarget,
    config: &ConvergenceConfig,
) -> Result<ConvergenceStats, ConvergenceError> {
    let target = target.mol_per_hour();
    let tolerance = target * config.production_rel_tol();
    let step = config.feed_step();

    let mut stats = ConvergenceStats {
        production_iters: 0,
        recycle_iters: converge_recycle(state, equilibrium, config)?,
    };

    loop {
        let styrene = state.product().styrene();
        if (target - styrene).abs() <= tolerance {
            debug!(
                basis = state.feed.basis(),
                styrene,
                production_iters = stats.production_iters,
                recycle_iters = stats.recycle_iters,
                "production rate converged"
            );
            return Ok(stats);
        }

        if stats.production_iters >= config.max_production_iters() {
            return Err(ConvergenceError::ProductionMaxIters {
                styrene,
                target,
                iters: stats.production_iters,
            });
        }

        let delta = if styrene < target { step } else { -step };
        state
            .feed
            .change_basis(delta)
            .map_err(|_| ConvergenceError::NegativeBasis {
                value: state.feed.basis() + delta,
            })?;
        state.extents = equilibrium.extents(&state.feed)?;
        stats.recycle_iters += converge_recycle(state, equilibrium, config)?;
        stats.production_iters += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::styrene::core::test_support::{
        coarse_config, equilibrium_875, initial_state,
    };

    #[test]
    fn meets_target_within_tolerance() {
        let equilibrium = equilibrium_875();
        let mut state = initial_state(&equilibrium, 1_000.0);
        let config = coarse_config();
        let target = ProductionTarget::new(5_000.0).unwrap();

        let stats = converge_production(&mut state, &equilibrium, target, &config).unwrap();

        let styrene = state.product().styrene();
        assert!((5_000.0 - styrene).abs() <= 5_000.0 * 1e-3);
        assert!(stats.production_iters > 0);
        assert!(stats.recycle_iters > 0);
    }

    #[test]
    fn steps_basis_down_when_overproducing() {
        let equilibrium = equilibrium_875();
        let mut state = initial_state(&equilibrium, 8_000.0);
        let config = coarse_config();
        let target = ProductionTarget::new(5_000.0).unwrap();

        converge_production(&mut state, &equilibrium, target, &config).unwrap();

        assert!(state.feed().basis() < 8_000.0);
        assert!((5_000.0 - state.product().styrene()).abs() <= 5_000.0 * 1e-3);
    }

    #[test]
    fn leaves_basis_alone_when_already_on_target() {
        let equilibrium = equilibrium_875();
        let mut state = initial_state(&equilibrium, 1_000.0);
        let config = coarse_config();
        let target = ProductionTarget::new(5_000.0).unwrap();
        converge_production(&mut state, &equilibrium, target, &config).unwrap();

        let basis = state.feed().basis();
        let stats = converge_production(&mut state, &equilibrium, target, &config).unwrap();

        assert_eq!(stats.production_iters, 0);
        assert_eq!(state.feed().basis(), basis);
    }

    #[test]
    fn iteration_ceiling_is_reported() {
        let equilibrium = equilibrium_875();
        let mut state = initial_state(&equilibrium, 1_000.0);
        let config = coarse_config().with_max_iters(10_000, 10);
        let target = ProductionTarget::new(5_000.0).unwrap();

        match converge_production(&mut state, &equilibrium, target, &config) {
            Err(ConvergenceError::ProductionMaxIters { iters, target, .. }) => {
                assert_eq!(iters, 10);
                assert_eq!(target, 5_000.0);
            }
            other => panic!("Expected ProductionMaxIters, got: {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_basis() {
        let equilibrium = equilibrium_875();
        let mut state = initial_state(&equilibrium, 0.5);
        let config = ConvergenceConfig::new(1e-5, 1e-5, 1.0).unwrap();
        let target = ProductionTarget::new(1e-6).unwrap();

        assert!(matches!(
            converge_production(&mut state, &equilibrium, target, &config),
            Err(ConvergenceError::NegativeBasis { .. })
        ));
    }
}
