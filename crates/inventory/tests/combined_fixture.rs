//! Whole-system regression fixture: nine mixed items ticked once.

use gildedrose_inventory::catalog::{
    AGED_BRIE, BACKSTAGE_PASS, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, SULFURAS,
};
use gildedrose_inventory::{Inventory, Item, ItemCategory};

fn fixture() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, MIN_QUALITY),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, LEGENDARY_QUALITY),
        Item::new(SULFURAS, -1, LEGENDARY_QUALITY),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

#[test]
fn combined_batch_single_tick() {
    gildedrose_observability::init();

    let mut inventory = Inventory::new(fixture());
    inventory.advance_one_day();

    let actual: Vec<(i64, i64)> = inventory
        .iter()
        .map(|item| (item.sell_in(), item.quality()))
        .collect();

    assert_eq!(
        actual,
        vec![
            (9, 19),
            (1, 1),
            (4, 6),
            (0, LEGENDARY_QUALITY),
            (-1, LEGENDARY_QUALITY),
            (14, 21),
            (9, MAX_QUALITY),
            (4, MAX_QUALITY),
            (2, 4),
        ]
    );
}

#[test]
fn batch_matches_independent_updates() {
    gildedrose_observability::init();

    let mut inventory: Inventory = fixture().into_iter().collect();
    inventory.advance_days(3);

    for (batched, original) in inventory.iter().zip(fixture()) {
        let mut alone = original;
        for _ in 0..3 {
            alone.update();
        }
        assert_eq!(batched, &alone, "{batched}");
    }
}

#[test]
fn categories_resolved_for_fixture() {
    let categories: Vec<ItemCategory> = fixture().iter().map(Item::category).collect();
    assert_eq!(
        categories,
        vec![
            ItemCategory::Ordinary,
            ItemCategory::AgedBrie,
            ItemCategory::Ordinary,
            ItemCategory::Legendary,
            ItemCategory::Legendary,
            ItemCategory::BackstagePass,
            ItemCategory::BackstagePass,
            ItemCategory::BackstagePass,
            ItemCategory::Conjured,
        ]
    );
}

#[test]
fn report_lines_after_a_day() {
    let mut inventory = Inventory::new(fixture());
    inventory.advance_one_day();

    let report: Vec<String> = (&inventory).into_iter().map(ToString::to_string).collect();
    assert_eq!(report[0], "+5 Dexterity Vest, 9, 19");
    assert_eq!(report[3], "Sulfuras, Hand of Ragnaros, 0, 80");
    assert_eq!(report[8], "Conjured Mana Cake, 2, 4");
}
