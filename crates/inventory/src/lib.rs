//! Inventory domain module.
//!
//! Inventory items as owner-scoped records plus the create/patch commands that
//! form the data-entry boundary (validation lives here, no IO).

pub mod item;

pub use item::{
    DEFAULT_REORDER_LEVEL, InventoryItem, InventoryItemPatch, NewInventoryItem, Unit,
};
