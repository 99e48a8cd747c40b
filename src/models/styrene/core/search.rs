//! Exhaustive search over a grid of operating conditions.
//!
//! Every condition is evaluated independently by a [`Model`] mapping an
//! [`OperatingCondition`] to a [`ConvergedTrial`]. The running best is kept
//! with a strict `>` comparison, so the first condition to reach a given
//! economic potential wins ties.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per condition:
//!
//! - [`Event::Evaluated`]: the trial converged and was scored
//! - [`Event::Failed`]: the model returned an error
//!
//! A failed trial is recorded without a score and the sweep moves on.
//! Observers can return [`Action::StopEarly`] to end the sweep after the
//! current condition.

use std::fmt::Display;

use thiserror::Error;
use tracing::{info, warn};
use twine_core::{Model, Observer};

use crate::support::grid::{SteppedRange, UpperBound};

use super::{ConvergedTrial, OperatingCondition};

/// The Cartesian product of steam ratio, pressure, and temperature ranges.
///
/// Pressures are in bar and temperatures in kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionGrid {
    steam_ratio: SteppedRange,
    pressure: SteppedRange,
    temperature: SteppedRange,
}

impl ConditionGrid {
    /// Creates a grid from three independent ranges.
    ///
    /// The pressure range always tolerates half a step of slack at its upper
    /// bound, whatever bound the given range carries.
    #[must_use]
    pub fn new(
        steam_ratio: SteppedRange,
        pressure: SteppedRange,
        temperature: SteppedRange,
    ) -> Self {
        Self {
            steam_ratio,
            pressure: pressure.with_upper_bound(UpperBound::HalfStepSlack),
            temperature,
        }
    }

    #[must_use]
    pub fn steam_ratio(&self) -> SteppedRange {
        self.steam_ratio
    }

    #[must_use]
    pub fn pressure(&self) -> SteppedRange {
        self.pressure
    }

    #[must_use]
    pub fn temperature(&self) -> SteppedRange {
        self.temperature
    }

    /// Iterates over every condition, steam ratio outermost and temperature innermost.
    pub fn conditions(&self) -> impl Iterator<Item = OperatingCondition> {
        let Self {
            steam_ratio,
            pressure,
            temperature,
        } = *self;

        steam_ratio.values().flat_map(move |steam_ratio| {
            pressure.values().flat_map(move |pressure| {
                temperature.values().map(move |temperature| {
                    OperatingCondition::new(steam_ratio, pressure, temperature)
                })
            })
        })
    }

    /// Number of conditions in the grid.
    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.steam_ratio.values().count()
            * self.pressure.values().count()
            * self.temperature.values().count()
    }
}

/// Events emitted by the condition search.
pub enum Event<'a, M: Model> {
    /// The model converged and scored the condition.
    Evaluated {
        /// The converged trial.
        trial: &'a ConvergedTrial,

        /// Whether this trial replaced the running best.
        improved: bool,
    },

    /// The model failed at this condition.
    Failed {
        condition: OperatingCondition,

        /// The model error.
        error: &'a M::Error,
    },
}

impl<M: Model> Event<'_, M> {
    /// Returns the condition that was evaluated (or attempted).
    #[must_use]
    pub fn condition(&self) -> OperatingCondition {
        match self {
            Self::Evaluated { trial, .. } => trial.condition,
            Self::Failed { condition, .. } => *condition,
        }
    }
}

/// Actions an observer can take during the condition search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep and return the results gathered so far.
    StopEarly,
}

/// Indicates whether every condition in the grid was visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every condition was evaluated.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// Score of one visited condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSummary {
    pub condition: OperatingCondition,

    /// Economic potential in $/hr, or `None` if the trial failed.
    pub economic_potential: Option<f64>,
}

/// Errors from interpreting search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No trial converged, so there is no optimum to report.
    #[error("no valid optimum found: all {trials} trials failed")]
    NoValidOptimum { trials: usize },
}

/// The outcome of a condition search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    /// Final search status.
    pub status: Status,

    /// Every visited condition, in visit order.
    pub trials: Vec<TrialSummary>,

    /// Best converged trial, if any trial converged.
    pub best: Option<ConvergedTrial>,
}

impl SearchResults {
    /// Returns the best converged trial.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoValidOptimum`] if every visited trial failed.
    pub fn optimum(&self) -> Result<&ConvergedTrial, SearchError> {
        self.best.as_ref().ok_or(SearchError::NoValidOptimum {
            trials: self.trials.len(),
        })
    }

    /// Number of visited conditions that failed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.trials
            .iter()
            .filter(|trial| trial.economic_potential.is_none())
            .count()
    }
}

/// Evaluates every condition in the grid and keeps the highest economic potential.
///
/// The observer receives an [`Event`] for each condition.
/// See the [module docs](self) for details on failures and observer actions.
pub fn search<M, Obs>(model: &M, grid: &ConditionGrid, mut observer: Obs) -> SearchResults
where
    M: Model<Input = OperatingCondition, Output = ConvergedTrial>,
    M::Error: Display,
    Obs: for<'a> Observer<Event<'a, M>, Action>,
{
    let trial_count = grid.trial_count();
    info!(trial_count, "starting operating-condition search");

    let mut trials = Vec::with_capacity(trial_count);
    let mut best: Option<ConvergedTrial> = None;
    let mut status = Status::Completed;

    for condition in grid.conditions() {
        let action = match model.call(&condition) {
            Ok(trial) => {
                let potential = trial.economic_potential();
                let improved = !potential.is_nan()
                    && best.is_none_or(|best| potential > best.economic_potential());

                trials.push(TrialSummary {
                    condition,
                    economic_potential: Some(potential),
                });

                let action = observer.observe(&Event::Evaluated {
                    trial: &trial,
                    improved,
                });
                if improved {
                    best = Some(trial);
                }
                action
            }
            Err(error) => {
                warn!(
                    steam_ratio = condition.steam_ratio,
                    pressure_bar = condition.pressure_bar(),
                    temperature_kelvin = condition.temperature_kelvin(),
                    %error,
                    "trial failed"
                );
                trials.push(TrialSummary {
                    condition,
                    economic_potential: None,
                });
                observer.observe(&Event::Failed {
                    condition,
                    error: &error,
                })
            }
        };

        if let Some(Action::StopEarly) = action {
            status = Status::StoppedByObserver;
            break;
        }
    }

    match &best {
        Some(best) => info!(
            steam_ratio = best.condition.steam_ratio,
            pressure_bar = best.condition.pressure_bar(),
            temperature_kelvin = best.condition.temperature_kelvin(),
            economic_potential = best.economic_potential(),
            visited = trials.len(),
            "search finished"
        ),
        None => warn!(visited = trials.len(), "search finished without a valid optimum"),
    }

    SearchResults {
        status,
        trials,
        best,
    }
}

/// Evaluates every condition in the grid without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
pub fn search_unobserved<M>(model: &M, grid: &ConditionGrid) -> SearchResults
where
    M: Model<Input = OperatingCondition, Output = ConvergedTrial>,
    M::Error: Display,
{
    search(model, grid, ())
}
