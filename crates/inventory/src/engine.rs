//! Daily tick over an inventory.

use tracing::{debug, trace};

use crate::item::Item;
use crate::rules;

/// The inn's inventory, aged one day per `update_quality` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance every item by one day, in place.
    pub fn update_quality(&mut self) {
        update_items(&mut self.items);
    }
}

/// Advance every item in `items` by one day, in place.
pub fn update_items(items: &mut [Item]) {
    for item in items.iter_mut() {
        let (sell_in, quality) = (item.sell_in(), item.quality());
        rules::age(item);
        trace!(
            item = item.name(),
            category = %item.category(),
            sell_in_before = sell_in,
            quality_before = quality,
            sell_in = item.sell_in(),
            quality = item.quality(),
            "item aged"
        );
        debug_assert!(
            item.check_invariants().is_ok(),
            "quality bound violated after tick: {item}"
        );
    }
    debug!(items = items.len(), "inventory aged one day");
}
