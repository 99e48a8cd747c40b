//! Equilibrium, mass-balance, and economic core of the styrene reactor model.
//!
//! A trial takes an [`OperatingCondition`] through two nested fixed-point
//! loops. The inner loop converges the ethylbenzene recycle for a given raw
//! feed basis; the outer loop steps the basis until styrene production meets
//! the [`ProductionTarget`]. The converged state is then priced by
//! [`EconomicSummary`].
//!
//! [`search`] sweeps a [`ConditionGrid`] of trials and keeps the best.

mod condition;
mod config;
mod economics;
mod equilibrium;
mod error;
mod feed;
mod product;
mod production;
mod recycle;
mod search;
mod trial;

#[cfg(test)]
mod test_support;

pub use condition::{OperatingCondition, ProductionTarget};
pub use config::{ConfigError, ConvergenceConfig};
pub use economics::{
    ETHYLBENZENE_MW, EconomicSummary, HYDROGEN_MW, METHANE_MW, MarketPrices, STYRENE_MW,
    TOLUENE_MW, WATER_MW, economic_potential,
};
pub use equilibrium::{
    APPROACH_TO_EQUILIBRIUM, DomainError, Equilibrium, LN_K_INTERCEPT, LN_K_SLOPE,
    SELECTIVITY_COEFF, SELECTIVITY_EXPONENT, equilibrium_constant, extents_of_reaction,
    selectivity,
};
pub use error::{ConvergenceError, TrialError};
pub use feed::{BENZENE_FEED_FRACTION, EB_FEED_FRACTION, ReactorFeed, TOLUENE_FEED_FRACTION};
pub use product::{Extents, ReactorProduct, ReactorState};
pub use production::{ConvergenceStats, converge_production};
pub use recycle::converge_recycle;
pub use search::{
    Action, ConditionGrid, Event, SearchError, SearchResults, Status, TrialSummary, search,
    search_unobserved,
};
pub use trial::{ConvergedTrial, run_trial};
