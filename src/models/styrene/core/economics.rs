//! Economic potential of a converged reactor state.
//!
//! Molar flows are converted to mass flows in pounds and priced per pound:
//! `mol/hr · kmol/mol · kg/kmol · lbm/kg · $/lbm = $/hr`.

use super::ReactorProduct;

/// Molecular weight of ethylbenzene, kg/kmol.
pub const ETHYLBENZENE_MW: f64 = 106.17;

/// Molecular weight of water, kg/kmol.
pub const WATER_MW: f64 = 18.015_28;

/// Molecular weight of styrene, kg/kmol.
pub const STYRENE_MW: f64 = 104.15;

/// Molecular weight of toluene, kg/kmol.
pub const TOLUENE_MW: f64 = 92.14;

/// Molecular weight of hydrogen gas, kg/kmol.
pub const HYDROGEN_MW: f64 = 1.008 * 2.0;

/// Molecular weight of methane, kg/kmol.
pub const METHANE_MW: f64 = 16.04;

const KMOL_PER_MOL: f64 = 1.0 / 1000.0;
const LBM_PER_KG: f64 = 1.0 / 0.453_592;

/// Unit market prices and costs, in $/lbm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketPrices {
    /// Cost of raw ethylbenzene feed.
    pub ethylbenzene: f64,

    /// Cost of process steam.
    pub steam: f64,

    pub styrene: f64,
    pub toluene: f64,
    pub hydrogen: f64,
    pub methane: f64,

    /// Cost of treating wastewater (condensed steam).
    pub wastewater: f64,
}

impl Default for MarketPrices {
    fn default() -> Self {
        Self {
            ethylbenzene: 0.50,
            steam: 0.044,
            styrene: 0.62,
            toluene: 0.44,
            hydrogen: 0.21,
            methane: 0.086,
            wastewater: 0.004,
        }
    }
}

/// Hourly value of a molar flow, $/hr.
fn hourly_value(mol_per_hour: f64, molecular_weight: f64, price_per_lbm: f64) -> f64 {
    mol_per_hour * KMOL_PER_MOL * molecular_weight * LBM_PER_KG * price_per_lbm
}

/// Breakdown of the economic potential, all in $/hr.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicSummary {
    /// Credits for styrene, toluene, hydrogen, and methane leaving the reactor.
    pub product_value: f64,

    /// Raw ethylbenzene (process feed only) plus steam.
    pub raw_materials_cost: f64,

    /// Treatment of the steam leaving the reactor.
    pub wastewater_cost: f64,
}

impl EconomicSummary {
    /// Prices the outlet and inlet streams.
    #[must_use]
    pub fn new(product: &ReactorProduct<'_>, prices: &MarketPrices) -> Self {
        let feed = product.feed();

        let product_value = hourly_value(product.styrene(), STYRENE_MW, prices.styrene)
            + hourly_value(product.toluene(), TOLUENE_MW, prices.toluene)
            + hourly_value(product.hydrogen(), HYDROGEN_MW, prices.hydrogen)
            + hourly_value(product.methane(), METHANE_MW, prices.methane);

        let feed_cost = hourly_value(feed.basis(), ETHYLBENZENE_MW, prices.ethylbenzene);
        let steam_cost = hourly_value(feed.steam(), WATER_MW, prices.steam);
        let raw_materials_cost = feed_cost + steam_cost;

        let wastewater_cost = hourly_value(product.steam(), WATER_MW, prices.wastewater);

        Self {
            product_value,
            raw_materials_cost,
            wastewater_cost,
        }
    }

    /// Net hourly value: `product_value - raw_materials_cost - wastewater_cost`.
    #[must_use]
    pub fn economic_potential(&self) -> f64 {
        self.product_value - self.raw_materials_cost - self.wastewater_cost
    }
}

/// Economic potential of a reactor product, $/hr.
///
/// Inputs are not validated; non-finite or negative flows propagate.
#[must_use]
pub fn economic_potential(product: &ReactorProduct<'_>, prices: &MarketPrices) -> f64 {
    EconomicSummary::new(product, prices).economic_potential()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::styrene::core::{Extents, ReactorFeed, ReactorState};

    fn state() -> ReactorState {
        let feed = ReactorFeed::new(100_000.0, 40_000.0, 6.0).unwrap();
        ReactorState::new(
            feed,
            Extents {
                main: 90_000.0,
                side: 3_600.0,
            },
        )
    }

    #[test]
    fn hand_computed_summary() {
        let state = state();
        let product = state.product();
        let summary = EconomicSummary::new(&product, &MarketPrices::default());

        let to_lbm = |mol: f64, mw: f64| mol / 1000.0 * mw / 0.453592;

        let styrene = to_lbm(90_000.0, 104.15) * 0.62;
        let toluene = to_lbm(3_000.0 + 3_600.0, 92.14) * 0.44;
        let hydrogen = to_lbm(90_000.0 - 3_600.0, 2.016) * 0.21;
        let methane = to_lbm(3_600.0, 16.04) * 0.086;
        assert_relative_eq!(
            summary.product_value,
            styrene + toluene + hydrogen + methane,
            max_relative = 1e-12
        );

        let steam = 135_000.0 * 6.0;
        assert_relative_eq!(
            summary.raw_materials_cost,
            to_lbm(100_000.0, 106.17) * 0.5 + to_lbm(steam, 18.01528) * 0.044,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            summary.wastewater_cost,
            to_lbm(steam, 18.01528) * 0.004,
            max_relative = 1e-12
        );

        assert_relative_eq!(
            economic_potential(&product, &MarketPrices::default()),
            summary.product_value - summary.raw_materials_cost - summary.wastewater_cost
        );
    }

    #[test]
    fn product_credits_raise_potential() {
        let state = state();
        let product = state.product();
        let base = MarketPrices::default();
        let baseline = economic_potential(&product, &base);

        for prices in [
            MarketPrices {
                styrene: base.styrene + 0.01,
                ..base
            },
            MarketPrices {
                toluene: base.toluene + 0.01,
                ..base
            },
            MarketPrices {
                hydrogen: base.hydrogen + 0.01,
                ..base
            },
            MarketPrices {
                methane: base.methane + 0.01,
                ..base
            },
        ] {
            assert!(economic_potential(&product, &prices) > baseline);
        }
    }

    #[test]
    fn costs_lower_potential() {
        let state = state();
        let product = state.product();
        let base = MarketPrices::default();
        let baseline = economic_potential(&product, &base);

        for prices in [
            MarketPrices {
                ethylbenzene: base.ethylbenzene + 0.01,
                ..base
            },
            MarketPrices {
                steam: base.steam + 0.01,
                ..base
            },
            MarketPrices {
                wastewater: base.wastewater + 0.01,
                ..base
            },
        ] {
            assert!(economic_potential(&product, &prices) < baseline);
        }
    }

    #[test]
    fn reactions_roughly_conserve_mass() {
        let state = state();
        let product = state.product();
        let feed = state.feed();

        let mass_in = feed.ethylbenzene() * ETHYLBENZENE_MW
            + feed.toluene() * TOLUENE_MW
            + feed.steam() * WATER_MW;
        let mass_out = product.ethylbenzene() * ETHYLBENZENE_MW
            + product.styrene() * STYRENE_MW
            + product.hydrogen() * HYDROGEN_MW
            + product.toluene() * TOLUENE_MW
            + product.methane() * METHANE_MW
            + product.steam() * WATER_MW;

        // Benzene passes through unchanged and is omitted from both sides.
        // The rounded molecular weights balance to within a few parts per million.
        assert_relative_eq!(mass_in, mass_out, max_relative = 1e-4);
    }
}
