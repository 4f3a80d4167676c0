//! Quality bounds shared by every item category.

/// Lowest quality a non-legendary item can reach.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can reach.
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Apply a signed delta to `quality`, then clamp to `[MIN_QUALITY, MAX_QUALITY]`.
///
/// The clamp runs after the arithmetic, so a value that starts out of range
/// is pulled back in by the first change.
pub fn clamp_quality(quality: i32, delta: i32) -> i32 {
    quality.saturating_add(delta).clamp(MIN_QUALITY, MAX_QUALITY)
}
