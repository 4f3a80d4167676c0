//! Report rendering.

use std::io::Write;

use serde::Serializer;

use gildedrose_inventory::DayReport;

use crate::cli::OutputFormat;

pub const BANNER: &str = "OMGHAI!";

/// Write the reports to `out` in the requested format, one day at a time.
pub fn write_reports<W, I>(out: &mut W, reports: I, format: OutputFormat) -> crate::Result<()>
where
    W: Write,
    I: IntoIterator<Item = DayReport>,
{
    match format {
        OutputFormat::Text => {
            writeln!(out, "{BANNER}")?;
            for report in reports {
                writeln!(out, "{report}")?;
            }
        }
        OutputFormat::Json => {
            let mut ser = serde_json::Serializer::pretty(&mut *out);
            ser.collect_seq(reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
