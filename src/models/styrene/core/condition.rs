use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{ConstraintResult, StrictlyPositive};

use super::economics::STYRENE_MW;

/// Reactor operating conditions for a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingCondition {
    /// Molar ratio of steam to ethylbenzene entering the reactor.
    pub steam_ratio: f64,

    /// Reactor pressure.
    pub pressure: Pressure,

    /// Reactor temperature.
    pub temperature: ThermodynamicTemperature,
}

impl OperatingCondition {
    /// Creates a condition from a steam ratio, a pressure in bar, and a temperature in kelvin.
    #[must_use]
    pub fn new(steam_ratio: f64, pressure_bar: f64, temperature_kelvin: f64) -> Self {
        Self {
            steam_ratio,
            pressure: Pressure::new::<bar>(pressure_bar),
            temperature: ThermodynamicTemperature::new::<kelvin>(temperature_kelvin),
        }
    }

    /// Reactor pressure in bar.
    #[must_use]
    pub fn pressure_bar(&self) -> f64 {
        self.pressure.get::<bar>()
    }

    /// Reactor temperature in kelvin.
    #[must_use]
    pub fn temperature_kelvin(&self) -> f64 {
        self.temperature.get::<kelvin>()
    }
}

/// Required styrene production rate, in mol/hr.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionTarget(f64);

impl ProductionTarget {
    /// Tonnes of styrene produced per year in the reference plant.
    pub const ANNUAL_TONNES: f64 = 80_000.0;

    /// Operating hours per year in the reference plant.
    pub const OPERATING_HOURS: f64 = 8_350.0;

    /// Creates a target from a molar flow in mol/hr.
    ///
    /// # Errors
    ///
    /// Returns an error unless the rate is strictly positive.
    pub fn new(mol_per_hour: f64) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(mol_per_hour)?.into_inner()))
    }

    /// The reference plant target: 80 000 t/yr over 8 350 h/yr, about 91 991 mol/hr.
    pub const REFERENCE: Self =
        Self(Self::ANNUAL_TONNES / Self::OPERATING_HOURS * 1000.0 / STYRENE_MW * 1000.0);

    #[must_use]
    pub fn reference() -> Self {
        Self::REFERENCE
    }

    #[must_use]
    pub fn mol_per_hour(&self) -> f64 {
        self.0
    }
}
