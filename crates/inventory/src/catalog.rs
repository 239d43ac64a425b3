//! Fixed catalog names and quality bounds.

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Any name starting with this prefix belongs to the conjured family.
pub const CONJURED_PREFIX: &str = "Conjured ";

pub const MIN_QUALITY: i64 = 0;
pub const MAX_QUALITY: i64 = 50;
pub const LEGENDARY_QUALITY: i64 = 80;
