use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use stockdesk_core::{OwnerId, RecordId};
use stockdesk_inventory::{InventoryItem, Unit};
use stockdesk_vendors::{ContactInfo, Rating, Vendor, VendorCategory};

pub fn owner() -> OwnerId {
    OwnerId::from_uuid(Uuid::from_u128(1))
}

pub fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
}

pub fn item(name: &str, stock_count: u32, reorder_level: u32) -> InventoryItem {
    priced_item(name, stock_count, reorder_level, Decimal::ZERO)
}

pub fn priced_item(name: &str, stock_count: u32, reorder_level: u32, price: Decimal) -> InventoryItem {
    InventoryItem::restore(
        RecordId::new(),
        owner(),
        name.to_string(),
        format!("{}001", name.chars().take(3).collect::<String>().to_uppercase()),
        stock_count,
        Unit::Pcs,
        reorder_level,
        price,
        at(),
        at(),
    )
}

pub fn vendor(name: &str, rating: u8) -> Vendor {
    categorized_vendor(name, rating, VendorCategory::Textiles)
}

pub fn categorized_vendor(name: &str, rating: u8, category: VendorCategory) -> Vendor {
    Vendor::restore(
        RecordId::new(),
        owner(),
        name.to_string(),
        category,
        Rating::new(rating).unwrap(),
        None,
        ContactInfo::default(),
        false,
        None,
        at(),
        at(),
    )
}
