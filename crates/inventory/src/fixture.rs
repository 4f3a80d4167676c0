//! Canonical starting inventory used by the daily report.

use crate::item::Item;

pub fn default_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        // Not a category of its own; ages like any normal item.
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemCategory;

    #[test]
    fn default_inventory_covers_every_category() {
        let items = default_inventory();
        let count = |category: ItemCategory| items.iter().filter(|i| i.category() == category).count();
        assert_eq!(items.len(), 9);
        assert_eq!(count(ItemCategory::Legendary), 2);
        assert_eq!(count(ItemCategory::BackstagePass), 3);
        assert_eq!(count(ItemCategory::AgedBrie), 1);
        assert_eq!(count(ItemCategory::Normal), 3);
    }
}
