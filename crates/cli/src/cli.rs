//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use gildedrose_observability::LogFormat;

/// Print the Gilded Rose inventory day by day.
#[derive(Debug, Parser)]
#[command(name = "gilded-rose")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of days to simulate
    #[arg(short, long, env = "GILDED_ROSE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// JSON file with the starting inventory (defaults to the built-in fixture)
    #[arg(short, long, env = "GILDED_ROSE_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log format on stderr
    #[arg(long, value_enum, env = "GILDED_ROSE_LOG_FORMAT", default_value_t = CliLogFormat::Pretty)]
    pub log_format: CliLogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per day: header, then `name, sell_in, quality` lines
    Text,
    /// A single JSON array of day reports
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliLogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

impl From<CliLogFormat> for LogFormat {
    fn from(value: CliLogFormat) -> Self {
        match value {
            CliLogFormat::Pretty => LogFormat::Pretty,
            CliLogFormat::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_two_days_of_text() {
        let cli = Cli::try_parse_from(["gilded-rose"]).unwrap();
        assert_eq!(cli.days, 2);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_format, CliLogFormat::Pretty);
        assert!(cli.inventory.is_none());
    }

    #[test]
    fn log_format_maps_onto_observability() {
        let cli = Cli::try_parse_from(["gilded-rose", "--log-format", "json"]).unwrap();
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
        assert_eq!(LogFormat::from(CliLogFormat::Pretty), LogFormat::Pretty);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Cli::try_parse_from(["gilded-rose", "--log-format", "xml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "gilded-rose",
            "--days",
            "30",
            "--inventory",
            "stock.json",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.days, 30);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.inventory, Some(PathBuf::from("stock.json")));
    }

    #[test]
    fn rejects_negative_days() {
        assert!(Cli::try_parse_from(["gilded-rose", "--days", "-1"]).is_err());
    }
}
