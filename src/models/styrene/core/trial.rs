//! A single operating-condition trial.

use super::{
    ConvergenceConfig, ConvergenceStats, EconomicSummary, Equilibrium, MarketPrices,
    OperatingCondition, ProductionTarget, ReactorFeed, ReactorState, TrialError,
    converge_production,
};

/// A converged and scored operating-condition trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergedTrial {
    pub condition: OperatingCondition,

    /// Reactor feed and extents after both loops converged.
    pub state: ReactorState,

    /// Economic breakdown of the converged state.
    pub economics: EconomicSummary,

    pub stats: ConvergenceStats,
}

impl ConvergedTrial {
    /// Net hourly value of this trial, $/hr.
    #[must_use]
    pub fn economic_potential(&self) -> f64 {
        self.economics.economic_potential()
    }
}

/// Converges and scores the reactor at one operating condition.
///
/// Builds a fresh feed from the configured initial guesses, converges the
/// recycle and production rate, then prices the result.
///
/// # Errors
///
/// Returns a [`TrialError`] if the condition is invalid, the equilibrium
/// model is undefined there, or either convergence loop fails.
pub fn run_trial(
    condition: &OperatingCondition,
    target: ProductionTarget,
    config: &ConvergenceConfig,
    prices: &MarketPrices,
) -> Result<ConvergedTrial, TrialError> {
    let equilibrium = Equilibrium::new(condition.temperature, condition.pressure)?;

    let feed = ReactorFeed::new(
        config.initial_basis(),
        config.initial_recycle(),
        condition.steam_ratio,
    )?;
    let extents = equilibrium.extents(&feed)?;
    let mut state = ReactorState::new(feed, extents);

    let stats = converge_production(&mut state, &equilibrium, target, config)?;
    let economics = EconomicSummary::new(&state.product(), prices);

    Ok(ConvergedTrial {
        condition: *condition,
        state,
        economics,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::styrene::core::{DomainError, test_support::coarse_config};

    #[test]
    fn reference_condition() {
        let condition = OperatingCondition::new(6.0, 0.4, 875.0);
        let target = ProductionTarget::reference();

        let trial = run_trial(
            &condition,
            target,
            &ConvergenceConfig::default(),
            &MarketPrices::default(),
        )
        .expect("reference condition should converge");

        let rate = target.mol_per_hour();
        let styrene = trial.state.product().styrene();
        assert!((rate - styrene).abs() <= rate * 1e-5);

        let product = trial.state.product();
        assert_relative_eq!(
            product.ethylbenzene(),
            trial.state.feed().recycled_ethylbenzene(),
            max_relative = 1e-5
        );
        assert_relative_eq!(
            product.total(),
            trial.state.feed().total() + trial.state.extents().main,
            max_relative = 1e-12
        );

        let potential = trial.economic_potential();
        assert!(potential.is_finite());
        assert_relative_eq!(potential, 410.65, max_relative = 1e-3);
    }

    #[test]
    fn reference_condition_is_deterministic() {
        let condition = OperatingCondition::new(6.0, 0.4, 875.0);
        let target = ProductionTarget::new(60_000.0).unwrap();
        let config = ConvergenceConfig::default();
        let prices = MarketPrices::default();

        let first = run_trial(&condition, target, &config, &prices).unwrap();
        let second = run_trial(&condition, target, &config, &prices).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.economic_potential().to_bits(),
            second.economic_potential().to_bits()
        );
    }

    #[test]
    fn rejects_invalid_conditions() {
        let target = ProductionTarget::new(5_000.0).unwrap();
        let config = coarse_config();
        let prices = MarketPrices::default();

        let cold = OperatingCondition::new(6.0, 0.4, 0.0);
        assert!(matches!(
            run_trial(&cold, target, &config, &prices),
            Err(TrialError::Domain(DomainError::NonPositiveTemperature { .. }))
        ));

        let negative_steam = OperatingCondition::new(-1.0, 0.4, 875.0);
        assert!(matches!(
            run_trial(&negative_steam, target, &config, &prices),
            Err(TrialError::InvalidCondition(_))
        ));
    }
}
