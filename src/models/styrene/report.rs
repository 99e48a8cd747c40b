//! Text summaries and CSV export for styrene reactor results.
//!
//! Nothing here touches the filesystem; callers choose the writer.

use std::{
    fmt,
    io::{self, Write},
};

use super::{ConvergedTrial, ReactorFeed, ReactorProduct, TrialSummary};

/// Header row written by [`write_csv`].
pub const CSV_HEADER: &str =
    "SteamRatio(mol:mol EB),Pressure(bar),Temperature(K),EconomicPotential($/hr)";

/// Writes one CSV row per trial, preceded by [`CSV_HEADER`].
///
/// Failed trials are written with an economic potential of `NaN`.
///
/// # Errors
///
/// Returns any error produced by the writer.
pub fn write_csv<W: Write>(trials: &[TrialSummary], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for trial in trials {
        let condition = &trial.condition;
        writeln!(
            writer,
            "{:.6},{:.6},{:.6},{:.6}",
            condition.steam_ratio,
            condition.pressure_bar(),
            condition.temperature_kelvin(),
            trial.economic_potential.unwrap_or(f64::NAN),
        )?;
    }
    writer.flush()
}

impl fmt::Display for ReactorFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Styrene Reactor Feed (mol/hr):")?;
        writeln!(f, "  Total ethylbenzene: {:>12.2}", self.ethylbenzene())?;
        writeln!(f, "  Process feed EB:    {:>12.2}", self.process_ethylbenzene())?;
        writeln!(f, "  Recycled EB:        {:>12.2}", self.recycled_ethylbenzene())?;
        writeln!(f, "  Toluene:            {:>12.2}", self.toluene())?;
        writeln!(f, "  Benzene:            {:>12.2}", self.benzene())?;
        writeln!(f, "  Steam:              {:>12.2}", self.steam())?;
        write!(f, "  Total:              {:>12.2}", self.total())
    }
}

impl fmt::Display for ReactorProduct<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Styrene Reactor Product (mol/hr):")?;
        writeln!(f, "  Ethylbenzene:       {:>12.2}", self.ethylbenzene())?;
        writeln!(f, "  Styrene:            {:>12.2}", self.styrene())?;
        writeln!(f, "  Hydrogen:           {:>12.2}", self.hydrogen())?;
        writeln!(f, "  Toluene:            {:>12.2}", self.toluene())?;
        writeln!(f, "  Benzene:            {:>12.2}", self.benzene())?;
        writeln!(f, "  Methane:            {:>12.2}", self.methane())?;
        writeln!(f, "  Steam:              {:>12.2}", self.steam())?;
        write!(f, "  Total:              {:>12.2}", self.total())
    }
}

impl fmt::Display for ConvergedTrial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let condition = &self.condition;
        let conversion = self.state.conversion();

        writeln!(f, "Economic potential: {:.2} $/hr", self.economic_potential())?;
        writeln!(f, "Steam ratio:        {} mol steam : mol EB", condition.steam_ratio)?;
        writeln!(f, "Pressure:           {} bar", condition.pressure_bar())?;
        writeln!(f, "Temperature:        {} K", condition.temperature_kelvin())?;
        writeln!(f)?;
        writeln!(f, "{}", self.state.feed())?;
        writeln!(f)?;
        writeln!(f, "{}", self.state.product())?;
        writeln!(f)?;
        writeln!(f, "X1 = {}", conversion.main)?;
        write!(f, "X2 = {}", conversion.side)
    }
}
