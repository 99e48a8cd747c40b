//! Styrene reactor models.
//!
//! This module provides a [`twine_core::Model`] that converges and scores
//! the styrene reactor at one operating condition, and a grid search over
//! such conditions. The computational core is in the internal [`core`] module.
//!
//! # Example
//!
//! ```
//! use styrene_models::models::styrene::{
//!     ConditionGrid, ConvergenceConfig, MarketPrices, ProductionTarget, StyreneProcess,
//!     search_unobserved,
//! };
//! use styrene_models::support::grid::SteppedRange;
//!
//! let process = StyreneProcess::new(
//!     ProductionTarget::new(60_000.0).unwrap(),
//!     ConvergenceConfig::default(),
//!     MarketPrices::default(),
//! );
//! let grid = ConditionGrid::new(
//!     SteppedRange::single(6.0).unwrap(),
//!     SteppedRange::single(0.4).unwrap(),
//!     SteppedRange::single(875.0).unwrap(),
//! );
//!
//! let results = search_unobserved(&process, &grid);
//! let best = results.optimum().unwrap();
//! assert!(best.economic_potential().is_finite());
//! ```

pub(crate) mod core;
pub mod report;

pub use self::core::{
    APPROACH_TO_EQUILIBRIUM, Action, BENZENE_FEED_FRACTION, ConditionGrid, ConfigError,
    ConvergedTrial, ConvergenceConfig, ConvergenceError, ConvergenceStats, DomainError,
    EB_FEED_FRACTION, ETHYLBENZENE_MW, EconomicSummary, Equilibrium, Event, Extents,
    HYDROGEN_MW, LN_K_INTERCEPT, LN_K_SLOPE, METHANE_MW, MarketPrices, OperatingCondition,
    ProductionTarget, ReactorFeed, ReactorProduct, ReactorState, SELECTIVITY_COEFF,
    SELECTIVITY_EXPONENT, STYRENE_MW, SearchError, SearchResults, Status, TOLUENE_FEED_FRACTION,
    TOLUENE_MW, TrialError, TrialSummary, WATER_MW, converge_production, converge_recycle,
    economic_potential, equilibrium_constant, extents_of_reaction, run_trial, search,
    search_unobserved, selectivity,
};

use twine_core::Model;

/// Converges and scores the styrene reactor at an operating condition.
///
/// Each call builds a fresh reactor feed from the configured initial guesses,
/// so calls are independent and deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyreneProcess {
    target: ProductionTarget,
    config: ConvergenceConfig,
    prices: MarketPrices,
}

impl StyreneProcess {
    #[must_use]
    pub fn new(target: ProductionTarget, config: ConvergenceConfig, prices: MarketPrices) -> Self {
        Self {
            target,
            config,
            prices,
        }
    }

    /// The reference plant: 80 000 t/yr of styrene with default tolerances and prices.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(
            ProductionTarget::reference(),
            ConvergenceConfig::default(),
            MarketPrices::default(),
        )
    }

    #[must_use]
    pub fn target(&self) -> ProductionTarget {
        self.target
    }

    #[must_use]
    pub fn config(&self) -> &ConvergenceConfig {
        &self.config
    }

    #[must_use]
    pub fn prices(&self) -> &MarketPrices {
        &self.prices
    }
}

impl Model for StyreneProcess {
    type Input = OperatingCondition;
    type Output = ConvergedTrial;
    type Error = TrialError;

    fn call(&self, condition: &OperatingCondition) -> Result<ConvergedTrial, TrialError> {
        run_trial(condition, self.target, &self.config, &self.prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::grid::SteppedRange;

    fn process() -> StyreneProcess {
        StyreneProcess::new(
            ProductionTarget::new(60_000.0).unwrap(),
            ConvergenceConfig::default(),
            MarketPrices::default(),
        )
    }

    #[test]
    fn call_delegates_to_the_trial() {
        let process = process();
        let condition = OperatingCondition::new(6.0, 0.4, 875.0);

        let trial = process.call(&condition).unwrap();

        assert_eq!(trial.condition, condition);
        assert!((60_000.0 - trial.state.product().styrene()).abs() <= 60_000.0 * 1e-5);
        assert!(trial.stats.production_iters > 0);
    }

    #[test]
    fn call_reports_trial_errors() {
        let condition = OperatingCondition::new(6.0, 0.4, -10.0);

        assert!(matches!(
            process().call(&condition),
            Err(TrialError::Domain(DomainError::NonPositiveTemperature { .. }))
        ));
    }

    #[test]
    fn call_rejects_selectivity_above_one() {
        let condition = OperatingCondition::new(6.0, 0.4, 1150.0);

        assert!(matches!(
            StyreneProcess::reference().call(&condition),
            Err(TrialError::Domain(DomainError::SelectivityAboveOne { .. }))
        ));
    }

    #[test]
    fn reference_search_reports_best_and_csv() {
        let grid = ConditionGrid::new(
            SteppedRange::single(6.0).unwrap(),
            SteppedRange::single(0.4).unwrap(),
            SteppedRange::from_raw(875.0, 890.0, 15.0).unwrap(),
        );

        let results = search_unobserved(&StyreneProcess::reference(), &grid);
        let best = results.optimum().unwrap();
        assert_eq!(best.condition, OperatingCondition::new(6.0, 0.4, 890.0));
        assert!(best.to_string().starts_with("Economic potential: 419.05 $/hr\n"));

        let mut out = Vec::new();
        report::write_csv(&results.trials, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], report::CSV_HEADER);
        assert!(lines[1].starts_with("6.000000,0.400000,875.000000,410.65"));
    }

    #[test]
    fn grid_search_is_deterministic() {
        let process = process();
        let grid = ConditionGrid::new(
            SteppedRange::single(6.0).unwrap(),
            SteppedRange::single(0.4).unwrap(),
            SteppedRange::from_raw(850.0, 950.0, 50.0).unwrap(),
        );

        let first = search_unobserved(&process, &grid);
        let second = search_unobserved(&process, &grid);

        assert_eq!(first.status, Status::Completed);
        assert_eq!(first.failures(), 0);
        assert_eq!(first, second);

        let best = first.optimum().unwrap();
        assert_eq!(
            best.economic_potential().to_bits(),
            second.optimum().unwrap().economic_potential().to_bits()
        );
        for trial in &first.trials {
            assert!(trial.economic_potential.unwrap() <= best.economic_potential());
        }
    }
}
