use core::str::FromStr;
use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;

use crate::catalog::{AGED_BRIE, BACKSTAGE_PASS, CONJURED_PREFIX, SULFURAS};

/// Update-rule category of an item, derived from its name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Ordinary,
    AgedBrie,
    Legendary,
    BackstagePass,
    Conjured,
}

impl ItemCategory {
    /// Resolve the category for a name. Pure and total.
    ///
    /// The three special names match exactly; the conjured family matches any
    /// name starting with `"Conjured "`. Everything else is `Ordinary`.
    pub fn of(name: &str) -> Self {
        match name {
            AGED_BRIE => ItemCategory::AgedBrie,
            SULFURAS => ItemCategory::Legendary,
            BACKSTAGE_PASS => ItemCategory::BackstagePass,
            n if n.starts_with(CONJURED_PREFIX) => ItemCategory::Conjured,
            _ => ItemCategory::Ordinary,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, ItemCategory::Legendary)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Ordinary => "ordinary",
            ItemCategory::AgedBrie => "aged_brie",
            ItemCategory::Legendary => "legendary",
            ItemCategory::BackstagePass => "backstage_pass",
            ItemCategory::Conjured => "conjured",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordinary" => Ok(ItemCategory::Ordinary),
            "aged_brie" => Ok(ItemCategory::AgedBrie),
            "legendary" => Ok(ItemCategory::Legendary),
            "backstage_pass" => Ok(ItemCategory::BackstagePass),
            "conjured" => Ok(ItemCategory::Conjured),
            other => Err(DomainError::validation(format!(
                "unknown item category: {other}"
            ))),
        }
    }
}
