//! `gildedrose-cli` — prints the inventory state for each simulated day.

pub mod cli;
pub mod dto;
pub mod error;
pub mod output;

use std::io::Write;

use tracing::info;

use gildedrose_inventory::{Item, Simulation, default_inventory};

pub use cli::{Cli, OutputFormat};
pub use error::{CliError, Result};

/// Load the starting inventory named by the arguments.
pub fn load_inventory(cli: &Cli) -> Result<Vec<Item>> {
    match &cli.inventory {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let items = dto::parse_inventory(&json)?;
            info!(path = %path.display(), items = items.len(), "loaded inventory");
            Ok(items)
        }
        None => Ok(default_inventory()),
    }
}

/// Run the simulation and write the report to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let items = load_inventory(cli)?;
    info!(days = cli.days, items = items.len(), "starting simulation");
    let reports = Simulation::new(items).days(cli.days);
    output::write_reports(out, reports, cli.format)
}
