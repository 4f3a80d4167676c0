//! Wire records for inventory files.

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainResult;
use gildedrose_inventory::Item;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl ItemRecord {
    pub fn into_item(self) -> DomainResult<Item> {
        Item::try_new(self.name, self.sell_in, self.quality)
    }
}

/// Parse a JSON array of item records into validated items.
pub fn parse_inventory(json: &str) -> crate::Result<Vec<Item>> {
    let records: Vec<ItemRecord> = serde_json::from_str(json)?;
    let items = records
        .into_iter()
        .map(ItemRecord::into_item)
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(items)
}
