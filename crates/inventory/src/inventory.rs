//! Ordered item collection and the nightly tick driver.

use crate::item::Item;

/// Ordered sequence of items, exclusively owned.
///
/// Items have no identity beyond their position; duplicate names are legal
/// and independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Apply one day's update rule to every item, in order, in place.
    ///
    /// Items never interact, so order only matters for log output.
    pub fn advance_one_day(&mut self) {
        let span = tracing::debug_span!("advance_one_day", items = self.items.len());
        let _enter = span.enter();

        for item in &mut self.items {
            let (sell_in, quality) = (item.sell_in(), item.quality());
            item.update();
            tracing::trace!(
                name = item.name(),
                category = %item.category(),
                sell_in,
                quality,
                next_sell_in = item.sell_in(),
                next_quality = item.quality(),
                "item updated"
            );
        }
    }

    /// Equivalent to calling [`Inventory::advance_one_day`] `days` times.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
