use async_trait::async_trait;
use tracing::instrument;

use stockdesk_core::{OwnerId, Record, RecordId};
use stockdesk_inventory::InventoryItem;
use stockdesk_profiles::Profile;
use stockdesk_vendors::Vendor;

use super::rows::{ItemRow, ProfileRow, VendorRow};
use super::{PostgresStore, map_sqlx_error};
use crate::error::{StoreError, StoreResult};
use crate::record_store::{ProfileStore, RecordStore};

const ITEM_COLUMNS: &str = "id, owner_id, name, code, stock_count, unit, reorder_level, \
     price_per_unit, created_at, updated_at";

const VENDOR_COLUMNS: &str = "id, owner_id, name, category, rating, price_tier, contact_email, \
     contact_phone, address, verified, last_order_date, created_at, updated_at";

const PROFILE_COLUMNS: &str = "id, owner_id, company_name, industry, phone, address, created_at, updated_at";

fn delete_outcome(rows_affected: u64) -> StoreResult<()> {
    if rows_affected == 0 {
        Err(StoreError::NotFound)
    } else {
        Ok(())
    }
}

#[async_trait]
impl RecordStore<InventoryItem> for PostgresStore {
    #[instrument(skip(self), fields(owner_id = %owner_id), err)]
    async fn list(&self, owner_id: OwnerId) -> StoreResult<Vec<InventoryItem>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM inventory_items WHERE owner_id = $1 \
             ORDER BY updated_at DESC, id DESC"
        );
        let rows: Vec<ItemRow> = sqlx::query_as(&sql)
            .bind(*owner_id.as_uuid())
            .fetch_all(self.pool())
            .await
            .map_err(|e| map_sqlx_error("list_items", e))?;

        rows.into_iter().map(InventoryItem::try_from).collect()
    }

    #[instrument(skip(self), fields(owner_id = %owner_id, item_id = %id), err)]
    async fn get(&self, owner_id: OwnerId, id: RecordId) -> StoreResult<Option<InventoryItem>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM inventory_items WHERE owner_id = $1 AND id = $2");
        let row: Option<ItemRow> = sqlx::query_as(&sql)
            .bind(*owner_id.as_uuid())
            .bind(*id.as_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| map_sqlx_error("get_item", e))?;

        row.map(InventoryItem::try_from).transpose()
    }

    #[instrument(skip(self, item), fields(owner_id = %item.owner_id(), item_id = %item.id()), err)]
    async fn insert(&self, item: InventoryItem) -> StoreResult<InventoryItem> {
        sqlx::query(
            r#"
            INSERT INTO inventory_items
                (id, owner_id, name, code, stock_count, unit, reorder_level, price_per_unit, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(*item.id().as_uuid())
        .bind(*item.owner_id().as_uuid())
        .bind(item.name())
        .bind(item.code())
        .bind(i64::from(item.stock_count()))
        .bind(item.unit().as_str())
        .bind(i64::from(item.reorder_level()))
        .bind(item.price_per_unit())
        .bind(item.created_at())
        .bind(item.updated_at())
        .execute(self.pool())
        .await
        .map_err(|e| map_sqlx_error("insert_item", e))?;

        Ok(item)
    }

    #[instrument(skip(self, item), fields(owner_id = %item.owner_id(), item_id = %item.id()), err)]
    async fn update(&self, item: InventoryItem) -> StoreResult<InventoryItem> {
        let result = sqlx::query(
            r#"
            UPDATE inventory_items
            SET name = $3, stock_count = $4, unit = $5, reorder_level = $6,
                price_per_unit = $7, updated_at = $8
            WHERE owner_id = $1 AND id = $2
            "#,
        )
        .bind(*item.owner_id().as_uuid())
        .bind(*item.id().as_uuid())
        .bind(item.name())
        .bind(i64::from(item.stock_count()))
        .bind(item.unit().as_str())
        .bind(i64::from(item.reorder_level()))
        .bind(item.price_per_unit())
        .bind(item.updated_at())
        .execute(self.pool())
        .await
        .map_err(|e| map_sqlx_error("update_item", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(item)
    }

    #[instrument(skip(self), fields(owner_id = %owner_id, item_id = %id), err)]
    async fn delete(&self, owner_id: OwnerId, id: RecordId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE owner_id = $1 AND id = $2")
            .bind(*owner_id.as_uuid())
            .bind(*id.as_uuid())
            .execute(self.pool())
            .await
            .map_err(|e| map_sqlx_error("delete_item", e))?;

        delete_outcome(result.rows_affected())
    }
}

#[async_trait]
impl RecordStore<Vendor> for PostgresStore {
    #[instrument(skip(self), fields(owner_id = %owner_id), err)]
    async fn list(&self, owner_id: OwnerId) -> StoreResult<Vec<Vendor>> {
        let sql = format!(
            "SELECT {VENDOR_COLUMNS} FROM vendors WHERE owner_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        let rows: Vec<VendorRow> = sqlx::query_as(&sql)
            .bind(*owner_id.as_uuid())
            .fetch_all(self.pool())
            .await
            .map_err(|e| map_sqlx_error("list_vendors", e))?;

        rows.into_iter().map(Vendor::try_from).collect()
    }

    #[instrument(skip(self), fields(owner_id = %owner_id, vendor_id = %id), err)]
    async fn get(&self, owner_id: OwnerId, id: RecordId) -> StoreResult<Option<Vendor>> {
        let sql = format!("SELECT {VENDOR_COLUMNS} FROM vendors WHERE owner_id = $1 AND id = $2");
        let row: Option<VendorRow> = sqlx::query_as(&sql)
            .bind(*owner_id.as_uuid())
            .bind(*id.as_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| map_sqlx_error("get_vendor", e))?;

        row.map(Vendor::try_from).transpose()
    }

    #[instrument(skip(self, vendor), fields(owner_id = %vendor.owner_id(), vendor_id = %vendor.id()), err)]
    async fn insert(&self, vendor: Vendor) -> StoreResult<Vendor> {
        let contact = vendor.contact();
        sqlx::query(
            r#"
            INSERT INTO vendors
                (id, owner_id, name, category, rating, price_tier, contact_email, contact_phone,
                 address, verified, last_order_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(*vendor.id().as_uuid())
        .bind(*vendor.owner_id().as_uuid())
        .bind(vendor.name())
        .bind(vendor.category().label())
        .bind(i16::from(vendor.rating().get()))
        .bind(vendor.price_tier().map(|t| t.as_str()))
        .bind(contact.email.as_deref())
        .bind(contact.phone.as_deref())
        .bind(contact.address.as_deref())
        .bind(vendor.is_verified())
        .bind(vendor.last_order_date())
        .bind(vendor.created_at())
        .bind(vendor.updated_at())
        .execute(self.pool())
        .await
        .map_err(|e| map_sqlx_error("insert_vendor", e))?;

        Ok(vendor)
    }

    #[instrument(skip(self, vendor), fields(owner_id = %vendor.owner_id(), vendor_id = %vendor.id()), err)]
    async fn update(&self, vendor: Vendor) -> StoreResult<Vendor> {
        let contact = vendor.contact();
        let result = sqlx::query(
            r#"
            UPDATE vendors
            SET name = $3, category = $4, rating = $5, price_tier = $6, contact_email = $7,
                contact_phone = $8, address = $9, verified = $10, last_order_date = $11,
                updated_at = $12
            WHERE owner_id = $1 AND id = $2
            "#,
        )
        .bind(*vendor.owner_id().as_uuid())
        .bind(*vendor.id().as_uuid())
        .bind(vendor.name())
        .bind(vendor.category().label())
        .bind(i16::from(vendor.rating().get()))
        .bind(vendor.price_tier().map(|t| t.as_str()))
        .bind(contact.email.as_deref())
        .bind(contact.phone.as_deref())
        .bind(contact.address.as_deref())
        .bind(vendor.is_verified())
        .bind(vendor.last_order_date())
        .bind(vendor.updated_at())
        .execute(self.pool())
        .await
        .map_err(|e| map_sqlx_error("update_vendor", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(vendor)
    }

    #[instrument(skip(self), fields(owner_id = %owner_id, vendor_id = %id), err)]
    async fn delete(&self, owner_id: OwnerId, id: RecordId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM vendors WHERE owner_id = $1 AND id = $2")
            .bind(*owner_id.as_uuid())
            .bind(*id.as_uuid())
            .execute(self.pool())
            .await
            .map_err(|e| map_sqlx_error("delete_vendor", e))?;

        delete_outcome(result.rows_affected())
    }
}

#[async_trait]
impl ProfileStore for PostgresStore {
    #[instrument(skip(self), fields(owner_id = %owner_id), err)]
    async fn get(&self, owner_id: OwnerId) -> StoreResult<Option<Profile>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE owner_id = $1");
        let row: Option<ProfileRow> = sqlx::query_as(&sql)
            .bind(*owner_id.as_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| map_sqlx_error("get_profile", e))?;

        row.map(Profile::try_from).transpose()
    }

    #[instrument(skip(self, profile), fields(owner_id = %profile.owner_id()), err)]
    async fn upsert(&self, profile: Profile) -> StoreResult<Profile> {
        // The row id and created_at of an existing profile win over the caller's.
        let sql = format!(
            r#"
            INSERT INTO profiles
                (id, owner_id, company_name, industry, phone, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (owner_id) DO UPDATE
            SET company_name = EXCLUDED.company_name,
                industry = EXCLUDED.industry,
                phone = EXCLUDED.phone,
                address = EXCLUDED.address,
                updated_at = EXCLUDED.updated_at
            RETURNING {PROFILE_COLUMNS}
            "#
        );
        let row: ProfileRow = sqlx::query_as(&sql)
            .bind(*profile.id().as_uuid())
            .bind(*profile.owner_id().as_uuid())
            .bind(profile.company_name())
            .bind(profile.industry().map(|i| i.label()))
            .bind(profile.phone())
            .bind(profile.address())
            .bind(profile.created_at())
            .bind(profile.updated_at())
            .fetch_one(self.pool())
            .await
            .map_err(|e| map_sqlx_error("upsert_profile", e))?;

        Profile::try_from(row)
    }
}
