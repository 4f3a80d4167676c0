//! Inventory aging rules for the Gilded Rose.
//!
//! Pure, deterministic domain logic: items age one day per tick according to
//! the rule family chosen when each item is built. No IO happens here.

pub mod engine;
pub mod fixture;
pub mod item;
pub mod rules;
pub mod simulation;

pub use engine::{GildedRose, update_items};
pub use fixture::default_inventory;
pub use item::{Item, ItemCategory};
pub use simulation::{DayReport, Simulation, report_count};
