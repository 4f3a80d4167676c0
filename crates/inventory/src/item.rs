use serde::Serialize;

use gildedrose_core::{DomainError, DomainResult, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";
pub const LEGENDARY_PREFIX: &str = "Sulfuras";

/// Rule family an item belongs to.
///
/// Resolved once when the item is built; the daily tick never looks at the
/// name again.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ItemCategory {
    Normal,
    AgedBrie,
    BackstagePass,
    Legendary,
}

impl ItemCategory {
    /// Classify an item by name. Unknown names are `Normal`.
    pub fn from_name(name: &str) -> Self {
        if name == AGED_BRIE {
            ItemCategory::AgedBrie
        } else if name.starts_with(LEGENDARY_PREFIX) {
            ItemCategory::Legendary
        } else if name.starts_with(BACKSTAGE_PASS_PREFIX) {
            ItemCategory::BackstagePass
        } else {
            ItemCategory::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Normal => "normal",
            ItemCategory::AgedBrie => "aged_brie",
            ItemCategory::BackstagePass => "backstage_pass",
            ItemCategory::Legendary => "legendary",
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, ItemCategory::Legendary)
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stocked item: name, days left to sell, and current quality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
    #[serde(skip)]
    category: ItemCategory,
}

impl Item {
    /// Build an item as given, classifying it by name.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::from_name(&name);
        Self::with_category(name, sell_in, quality, category)
    }

    /// Build an item with an explicit category, skipping name matching.
    pub fn with_category(
        name: impl Into<String>,
        sell_in: i32,
        quality: i32,
        category: ItemCategory,
    ) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
            category,
        }
    }

    /// Build an item from an external record, rejecting values the rules
    /// would never produce.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let item = Self::new(name, sell_in, quality);
        if item.category.is_legendary() && quality != LEGENDARY_QUALITY {
            return Err(DomainError::validation(format!(
                "legendary item '{}' must have quality {LEGENDARY_QUALITY}, got {quality}",
                item.name
            )));
        }
        item.check_invariants().map_err(|_| {
            DomainError::validation(format!(
                "item '{}' quality must be within [{MIN_QUALITY}, {MAX_QUALITY}], got {quality}",
                item.name
            ))
        })?;
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Past the sell-by date.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Quality bound check. Legendary items are exempt.
    pub fn check_invariants(&self) -> DomainResult<()> {
        if self.category.is_legendary() {
            return Ok(());
        }
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(DomainError::invariant(format!(
                "quality of '{}' out of bounds: {}",
                self.name, self.quality
            )));
        }
        Ok(())
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_resolved_from_name() {
        assert_eq!(Item::new("Aged Brie", 2, 0).category(), ItemCategory::AgedBrie);
        assert_eq!(
            Item::new("Sulfuras, Hand of Ragnaros", 0, 80).category(),
            ItemCategory::Legendary
        );
        assert_eq!(
            Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20).category(),
            ItemCategory::BackstagePass
        );
        assert_eq!(Item::new("foo", 10, 20).category(), ItemCategory::Normal);
    }

    #[test]
    fn unknown_and_near_miss_names_are_normal() {
        assert_eq!(Item::new("Conjured Mana Cake", 3, 6).category(), ItemCategory::Normal);
        assert_eq!(Item::new("Aged Brie Deluxe", 3, 6).category(), ItemCategory::Normal);
        assert_eq!(Item::new("aged brie", 3, 6).category(), ItemCategory::Normal);
    }

    #[test]
    fn display_uses_report_line_format() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");
    }

    #[test]
    fn try_new_rejects_blank_name() {
        let err = Item::try_new("   ", 1, 1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn try_new_rejects_quality_out_of_range() {
        assert!(Item::try_new("foo", 1, 51).is_err());
        assert!(Item::try_new("foo", 1, -1).is_err());
        assert!(Item::try_new("Aged Brie", 1, 50).is_ok());
    }

    #[test]
    fn try_new_requires_fixed_legendary_quality() {
        assert!(Item::try_new("Sulfuras, Hand of Ragnaros", 0, 80).is_ok());
        assert!(Item::try_new("Sulfuras, Hand of Ragnaros", 0, 50).is_err());
    }

    #[test]
    fn check_invariants_exempts_legendary() {
        assert!(Item::new("Sulfuras, Hand of Ragnaros", 0, 80).check_invariants().is_ok());
        let err = Item::new("foo", 0, 80).check_invariants().unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation"),
        }
    }

    #[test]
    fn with_category_overrides_name_matching() {
        let item = Item::with_category("Fine Cheddar", 3, 10, ItemCategory::AgedBrie);
        assert_eq!(item.category(), ItemCategory::AgedBrie);
    }
}
