//! Inventory domain module.
//!
//! Nightly quality / sell-by update for the shop catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod category;
pub mod inventory;
pub mod item;
pub mod rules;

pub use category::ItemCategory;
pub use inventory::Inventory;
pub use item::{Item, ItemRecord};
