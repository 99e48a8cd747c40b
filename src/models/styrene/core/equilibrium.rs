//! Reaction equilibrium and selectivity for ethylbenzene dehydrogenation.
//!
//! Main reaction: `EB -> S + H2` (extent `x1`).
//! Side reaction: `EB + H2 -> T + CH4` (extent `x2`).

use thiserror::Error;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::kelvin,
};

use super::{Extents, ReactorFeed};

/// Intercept `a` of the equilibrium fit `ln K = a - b / T`.
pub const LN_K_INTERCEPT: f64 = 15.5408;

/// Slope `b` of the equilibrium fit `ln K = a - b / T`, in kelvin.
pub const LN_K_SLOPE: f64 = 14852.6;

/// Coefficient `c` of the selectivity power fit `y = c · T^p`.
pub const SELECTIVITY_COEFF: f64 = 2.800_115_938_9e-45;

/// Exponent `p` of the selectivity power fit `y = c · T^p`.
pub const SELECTIVITY_EXPONENT: f64 = 14.669_631_361;

/// Fraction of the equilibrium extent actually reached in the reactor.
pub const APPROACH_TO_EQUILIBRIUM: f64 = 0.8;

/// Errors from evaluating the equilibrium model outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("temperature must be positive and finite, got {temperature} K")]
    NonPositiveTemperature { temperature: f64 },

    #[error("side-reaction selectivity exceeds one: {selectivity}")]
    SelectivityAboveOne { selectivity: f64 },

    #[error("extent denominator is zero or not finite: {denominator}")]
    ZeroDenominator { denominator: f64 },

    #[error("extent radicand is negative: {radicand}")]
    NegativeRadicand { radicand: f64 },

    #[error("extent of reaction is not finite: {x1}")]
    NonFinite { x1: f64 },
}

fn checked_kelvin(temperature: ThermodynamicTemperature) -> Result<f64, DomainError> {
    let t = temperature.get::<kelvin>();
    if t.is_finite() && t > 0.0 {
        Ok(t)
    } else {
        Err(DomainError::NonPositiveTemperature { temperature: t })
    }
}

/// Equilibrium constant of the main reaction, `K = exp(a - b / T)`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveTemperature`] unless `T > 0`.
pub fn equilibrium_constant(temperature: ThermodynamicTemperature) -> Result<f64, DomainError> {
    let t = checked_kelvin(temperature)?;
    Ok((LN_K_INTERCEPT - LN_K_SLOPE / t).exp())
}

/// Selectivity `y = x2 / x1` of the toluene side reaction.
///
/// The fit passes one near 1089 K; callers get the raw value and
/// [`extents_of_reaction`] rejects it.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveTemperature`] unless `T > 0`.
pub fn selectivity(temperature: ThermodynamicTemperature) -> Result<f64, DomainError> {
    let t = checked_kelvin(temperature)?;
    Ok(SELECTIVITY_COEFF * t.powf(SELECTIVITY_EXPONENT))
}

/// Actual extents of both reactions.
///
/// Solves the equilibrium quadratic for the ideal main-reaction extent,
/// scales it by [`APPROACH_TO_EQUILIBRIUM`], and derives the side extent
/// from the selectivity.
///
/// - `f`: total reactor feed, mol/hr
/// - `k`: equilibrium constant
/// - `eb`: ethylbenzene entering the reactor, mol/hr
/// - `y`: selectivity
/// - `p`: pressure, bar
///
/// # Errors
///
/// Returns [`DomainError::SelectivityAboveOne`] if `y > 1`, since the side
/// reaction would then consume more hydrogen than the main reaction makes.
/// Returns another [`DomainError`] if the quadratic has no real, finite root.
pub fn extents_of_reaction(
    f: f64,
    k: f64,
    eb: f64,
    y: f64,
    p: f64,
) -> Result<Extents, DomainError> {
    if y > 1.0 {
        return Err(DomainError::SelectivityAboveOne { selectivity: y });
    }

    let d = k * y + k - p * y + p;
    if d == 0.0 || !d.is_finite() {
        return Err(DomainError::ZeroDenominator { denominator: d });
    }

    let b = f * k * y + f * k - k * eb;
    let radicand = 4.0 * f * k * eb * d + b * b;
    if radicand < 0.0 {
        return Err(DomainError::NegativeRadicand { radicand });
    }

    let x1_ideal = (radicand.sqrt() - b) / (2.0 * d);
    if !x1_ideal.is_finite() {
        return Err(DomainError::NonFinite { x1: x1_ideal });
    }

    let main = APPROACH_TO_EQUILIBRIUM * x1_ideal;
    Ok(Extents {
        main,
        side: y * main,
    })
}

/// Temperature- and pressure-dependent reaction data for one trial.
///
/// Evaluating the fits once per trial keeps the convergence loops to pure
/// mass-balance arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium {
    k: f64,
    selectivity: f64,
    pressure: f64,
}

impl Equilibrium {
    /// Evaluates the equilibrium constant and selectivity at the given conditions.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveTemperature`] unless `T > 0`.
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            k: equilibrium_constant(temperature)?,
            selectivity: selectivity(temperature)?,
            pressure: pressure.get::<bar>(),
        })
    }

    #[must_use]
    pub fn k(&self) -> f64 {
        self.k
    }

    #[must_use]
    pub fn selectivity(&self) -> f64 {
        self.selectivity
    }

    /// Reactor pressure in bar.
    #[must_use]
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Extents of reaction for the given reactor feed.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the quadratic has no real, finite root.
    pub fn extents(&self, feed: &ReactorFeed) -> Result<Extents, DomainError> {
        extents_of_reaction(
            feed.total(),
            self.k,
            feed.ethylbenzene(),
            self.selectivity,
            self.pressure,
        )
    }
}
