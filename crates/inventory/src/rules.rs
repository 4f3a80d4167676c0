//! Per-category aging rules.
//!
//! Every rule follows the same order: adjust quality using the pre-tick
//! `sell_in`, decrement `sell_in`, then apply the expired branch if the new
//! `sell_in` is negative. Each quality change is clamped on its own.

use gildedrose_core::{MIN_QUALITY, clamp_quality};

use crate::item::{Item, ItemCategory};

/// Backstage passes gain +2 at or below this many days.
pub const URGENT_DAYS: i32 = 10;

/// Backstage passes gain +3 at or below this many days.
pub const CRITICAL_DAYS: i32 = 5;

/// Advance a single item by one day.
pub fn age(item: &mut Item) {
    match item.category() {
        ItemCategory::Normal => age_normal(item),
        ItemCategory::AgedBrie => age_aged_brie(item),
        ItemCategory::BackstagePass => age_backstage_pass(item),
        ItemCategory::Legendary => {}
    }
}

fn age_normal(item: &mut Item) {
    shift_quality(item, -1);
    count_down(item);
    if item.is_expired() {
        shift_quality(item, -1);
    }
}

fn age_aged_brie(item: &mut Item) {
    shift_quality(item, 1);
    count_down(item);
    if item.is_expired() {
        shift_quality(item, 1);
    }
}

fn age_backstage_pass(item: &mut Item) {
    shift_quality(item, backstage_increase(item.sell_in));
    count_down(item);
    if item.is_expired() {
        item.quality = MIN_QUALITY;
    }
}

/// Quality gain for a backstage pass with `days` left before the concert.
pub fn backstage_increase(days: i32) -> i32 {
    if days <= CRITICAL_DAYS {
        3
    } else if days <= URGENT_DAYS {
        2
    } else {
        1
    }
}

fn shift_quality(item: &mut Item, delta: i32) {
    item.quality = clamp_quality(item.quality, delta);
}

// Saturates at i32::MIN; such an item stays expired.
fn count_down(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}
