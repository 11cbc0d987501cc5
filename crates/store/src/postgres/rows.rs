//! Row shapes as stored, and their conversion into domain records.
//!
//! Conversions are fallible: a row that no longer satisfies the domain's
//! constraints (unknown enum text, out-of-range count) surfaces as a
//! `Backend` error rather than a panic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use stockdesk_core::{OwnerId, RecordId};
use stockdesk_inventory::{InventoryItem, Unit};
use stockdesk_profiles::{Industry, Profile};
use stockdesk_vendors::{ContactInfo, PriceTier, Rating, Vendor, VendorCategory};

use crate::error::StoreError;

fn corrupt(table: &str, id: Uuid, detail: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(format!("corrupt {table} row {id}: {detail}"))
}

#[derive(Debug, FromRow)]
pub(super) struct ItemRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub code: String,
    pub stock_count: i64,
    pub unit: String,
    pub reorder_level: i64,
    pub price_per_unit: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ItemRow> for InventoryItem {
    type Error = StoreError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let stock_count = u32::try_from(row.stock_count)
            .map_err(|_| corrupt("inventory_items", row.id, "stock_count out of range"))?;
        let reorder_level = u32::try_from(row.reorder_level)
            .map_err(|_| corrupt("inventory_items", row.id, "reorder_level out of range"))?;
        let unit: Unit = row
            .unit
            .parse()
            .map_err(|e| corrupt("inventory_items", row.id, e))?;

        Ok(InventoryItem::restore(
            RecordId::from_uuid(row.id),
            OwnerId::from_uuid(row.owner_id),
            row.name,
            row.code,
            stock_count,
            unit,
            reorder_level,
            row.price_per_unit,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[derive(Debug, FromRow)]
pub(super) struct VendorRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub category: String,
    pub rating: i16,
    pub price_tier: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub verified: bool,
    pub last_order_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<VendorRow> for Vendor {
    type Error = StoreError;

    fn try_from(row: VendorRow) -> Result<Self, Self::Error> {
        let category: VendorCategory = row
            .category
            .parse()
            .map_err(|e| corrupt("vendors", row.id, e))?;
        let rating = u8::try_from(row.rating)
            .ok()
            .and_then(|r| Rating::new(r).ok())
            .ok_or_else(|| corrupt("vendors", row.id, format!("rating {} out of range", row.rating)))?;
        let price_tier = row
            .price_tier
            .as_deref()
            .map(str::parse::<PriceTier>)
            .transpose()
            .map_err(|e| corrupt("vendors", row.id, e))?;

        Ok(Vendor::restore(
            RecordId::from_uuid(row.id),
            OwnerId::from_uuid(row.owner_id),
            row.name,
            category,
            rating,
            price_tier,
            ContactInfo {
                email: row.contact_email,
                phone: row.contact_phone,
                address: row.address,
            },
            row.verified,
            row.last_order_date,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ProfileRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = StoreError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let industry = row
            .industry
            .as_deref()
            .map(str::parse::<Industry>)
            .transpose()
            .map_err(|e| corrupt("profiles", row.id, e))?;

        Ok(Profile::restore(
            RecordId::from_uuid(row.id),
            OwnerId::from_uuid(row.owner_id),
            row.company_name,
            industry,
            row.phone,
            row.address,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn item_row() -> ItemRow {
        ItemRow {
            id: Uuid::now_v7(),
            owner_id: Uuid::now_v7(),
            name: "Cotton Yarn".to_string(),
            code: "COT042".to_string(),
            stock_count: 12,
            unit: "kg".to_string(),
            reorder_level: 10,
            price_per_unit: Decimal::new(2550, 2),
            created_at: at(),
            updated_at: at(),
        }
    }

    #[test]
    fn item_row_restores_domain_record() {
        let item = InventoryItem::try_from(item_row()).unwrap();
        assert_eq!(item.unit(), Unit::Kg);
        assert_eq!(item.stock_count(), 12);
        assert_eq!(item.code(), "COT042");
    }

    #[test]
    fn negative_counts_and_unknown_units_are_backend_errors() {
        let mut row = item_row();
        row.stock_count = -1;
        assert!(matches!(InventoryItem::try_from(row), Err(StoreError::Backend(_))));

        let mut row = item_row();
        row.unit = "gallon".to_string();
        assert!(matches!(InventoryItem::try_from(row), Err(StoreError::Backend(_))));
    }

    #[test]
    fn vendor_row_rejects_out_of_range_rating() {
        let row = VendorRow {
            id: Uuid::now_v7(),
            owner_id: Uuid::now_v7(),
            name: "Loom Ltd".to_string(),
            category: "Raw Materials".to_string(),
            rating: 9,
            price_tier: Some("medium".to_string()),
            contact_email: None,
            contact_phone: None,
            address: None,
            verified: true,
            last_order_date: None,
            created_at: at(),
            updated_at: at(),
        };
        assert!(matches!(Vendor::try_from(row), Err(StoreError::Backend(_))));
    }

    #[test]
    fn profile_row_parses_industry_label() {
        let row = ProfileRow {
            id: Uuid::now_v7(),
            owner_id: Uuid::now_v7(),
            company_name: Some("Acme".to_string()),
            industry: Some("Food Processing".to_string()),
            phone: None,
            address: None,
            created_at: at(),
            updated_at: at(),
        };
        let profile = Profile::try_from(row).unwrap();
        assert_eq!(profile.industry(), Some(Industry::FoodProcessing));
    }
}
