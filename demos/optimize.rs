//! Searches the reference operating grid and reports the best condition.
//!
//! Steam ratio 6, pressure 0.4 bar, temperatures 800 K to 950 K in 5 K steps.
//! The optimum summary and a CSV of every trial are written to stdout; logs
//! go to stderr and can be tuned with `RUST_LOG`.
//!
//! ```text
//! cargo run --release --example optimize > trials.txt
//! ```

use std::{error::Error, io};

use styrene_models::{
    models::styrene::{ConditionGrid, StyreneProcess, report::write_csv, search_unobserved},
    support::grid::SteppedRange,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let grid = ConditionGrid::new(
        SteppedRange::from_raw(6.0, 6.0, 0.5)?,
        SteppedRange::from_raw(0.4, 0.4, 0.1)?,
        SteppedRange::from_raw(800.0, 950.0, 5.0)?,
    );

    let results = search_unobserved(&StyreneProcess::reference(), &grid);
    let best = results.optimum()?;

    println!("Optimal operating condition");
    println!("{best}");
    println!();

    write_csv(&results.trials, io::stdout().lock())?;
    Ok(())
}
