//! Multi-day runs and the per-day report.

use serde::Serialize;

use crate::engine::GildedRose;
use crate::item::Item;

/// Inventory state at the end of a given day (day 0 is the starting state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub day: u32,
    pub items: Vec<Item>,
}

impl core::fmt::Display for DayReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "-------- day {} --------", self.day)?;
        writeln!(f, "name, sell_in, quality")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Iterator over successive days of an inventory.
///
/// The first report is the untouched inventory; every following report is
/// one `update_quality` later. The iterator never ends on its own.
#[derive(Debug, Clone)]
pub struct Simulation {
    shop: GildedRose,
    day: u32,
    started: bool,
}

impl Simulation {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            shop: GildedRose::new(items),
            day: 0,
            started: false,
        }
    }

    /// Lazy reports for days `0..=days`.
    pub fn days(self, days: u32) -> core::iter::Take<Self> {
        self.take(report_count(days))
    }

    /// Reports for days `0..=days`, collected.
    pub fn run(self, days: u32) -> Vec<DayReport> {
        self.days(days).collect()
    }

    pub fn shop(&self) -> &GildedRose {
        &self.shop
    }
}

/// Number of reports covering days `0..=days`, saturating on narrow targets.
pub fn report_count(days: u32) -> usize {
    usize::try_from(days).map_or(usize::MAX, |d| d.saturating_add(1))
}

impl Iterator for Simulation {
    type Item = DayReport;

    fn next(&mut self) -> Option<DayReport> {
        if self.started {
            self.shop.update_quality();
            self.day = self.day.checked_add(1)?;
        } else {
            self.started = true;
        }
        Some(DayReport {
            day: self.day,
            items: self.shop.items().to_vec(),
        })
    }
}
