use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::kelvin,
};

use super::{ConvergenceConfig, Equilibrium, ReactorFeed, ReactorState};

/// Equilibrium at the reference condition, 875 K and 0.4 bar.
pub(super) fn equilibrium_875() -> Equilibrium {
    Equilibrium::new(
        ThermodynamicTemperature::new::<kelvin>(875.0),
        Pressure::new::<bar>(0.4),
    )
    .unwrap()
}

/// Unconverged state with a 100 mol/hr recycle guess and a steam ratio of 6.
pub(super) fn initial_state(equilibrium: &Equilibrium, basis: f64) -> ReactorState {
    let feed = ReactorFeed::new(basis, 100.0, 6.0).unwrap();
    let extents = equilibrium.extents(&feed).unwrap();
    ReactorState::new(feed, extents)
}

/// Production tolerance wide enough for a unit feed step to settle on small targets.
pub(super) fn coarse_config() -> ConvergenceConfig {
    ConvergenceConfig::new(1e-5, 1e-3, 1.0).unwrap()
}
