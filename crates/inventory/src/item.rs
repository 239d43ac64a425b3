use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::catalog::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::category::ItemCategory;
use crate::rules;

/// One catalog entry at a point in time.
///
/// The category is resolved from the name once, at construction, and never
/// changes afterwards. Serialized items go through [`ItemRecord`], so a
/// deserialized item is normalized exactly like one built with [`Item::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: ItemCategory,
    sell_in: i64,
    quality: i64,
}

impl Item {
    /// Create an item. Never fails.
    ///
    /// Legendary items are forced to quality 80 immediately. Other categories
    /// keep an out-of-range quality as-is until the next update clamps it.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        let name = name.into();
        let category = ItemCategory::of(&name);
        let quality = if category.is_legendary() {
            LEGENDARY_QUALITY
        } else {
            quality
        };

        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    /// Validating constructor for callers that want bad input rejected up front.
    pub fn checked(name: impl Into<String>, sell_in: i64, quality: i64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let item = Self::new(name, sell_in, quality);
        if !item.category.is_legendary() && !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(DomainError::invariant(format!(
                "quality must be within {MIN_QUALITY}..={MAX_QUALITY}, got {quality}"
            )));
        }
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    /// Advance this item by one day, in place.
    pub fn update(&mut self) {
        let (sell_in, quality) = rules::next_state(self.category, self.sell_in, self.quality);
        self.sell_in = sell_in;
        self.quality = quality;
    }
}

/// Wire shape of an [`Item`]. The category is derived from `name` on the way
/// in and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i64,
    pub quality: i64,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        ItemRecord {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
