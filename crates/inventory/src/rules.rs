//! Per-category update rules.
//!
//! Every rule except `Legendary` commits the `sell_in` decrement first and
//! then derives the new quality from the *decremented* value. Clamping happens
//! after the arithmetic, never before.

use crate::catalog::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::category::ItemCategory;

/// Compute the next-day `(sell_in, quality)` for an item of `category`.
pub fn next_state(category: ItemCategory, sell_in: i64, quality: i64) -> (i64, i64) {
    let next = sell_in.saturating_sub(1);
    let quality = match category {
        ItemCategory::Legendary => return (sell_in, LEGENDARY_QUALITY),
        ItemCategory::Ordinary => quality.saturating_sub(degradation(next, 1)),
        ItemCategory::Conjured => quality.saturating_sub(degradation(next, 2)),
        ItemCategory::AgedBrie => quality.saturating_add(degradation(next, 1)),
        ItemCategory::BackstagePass => match next {
            s if s > 10 => quality.saturating_add(1),
            s if s > 5 => quality.saturating_add(2),
            s if s >= 0 => quality.saturating_add(3),
            _ => MIN_QUALITY,
        },
    };

    (next, clamp_quality(quality))
}

/// Daily rate, doubled once the sell-by date has passed.
fn degradation(sell_in: i64, base: i64) -> i64 {
    if sell_in >= 0 { base } else { base * 2 }
}

pub fn clamp_quality(quality: i64) -> i64 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
