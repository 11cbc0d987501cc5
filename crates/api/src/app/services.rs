//! Application services: owner-scoped use cases over the record stores.
//!
//! Each call takes a fresh snapshot from the stores and, where a derived view
//! is needed, hands it to `stockdesk-analytics`. Nothing is cached between
//! requests.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use stockdesk_analytics::{self as analytics, InventoryReport, ReorderLine};
use stockdesk_core::error::require_name;
use stockdesk_core::{DomainError, OwnerId, Record, RecordId};
use stockdesk_inventory::{InventoryItem, InventoryItemPatch, NewInventoryItem};
use stockdesk_profiles::{Profile, ProfileUpsert};
use stockdesk_store::{
    InMemoryProfileStore, InMemoryRecordStore, PostgresStore, ProfileStore, RecordStore, StoreError,
};
use stockdesk_vendors::{NewVendor, Vendor, VendorPatch};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Filtered inventory list plus the badge count over the whole snapshot.
#[derive(Debug, Clone)]
pub struct ItemListing {
    pub items: Vec<InventoryItem>,
    pub low_stock_count: usize,
}

/// Filtered vendor list plus the highest-rated vendor of the whole snapshot.
#[derive(Debug, Clone)]
pub struct VendorListing {
    pub vendors: Vec<Vendor>,
    pub suggested: Option<Vendor>,
}

#[derive(Clone)]
pub struct AppServices {
    items: Arc<dyn RecordStore<InventoryItem>>,
    vendors: Arc<dyn RecordStore<Vendor>>,
    profiles: Arc<dyn ProfileStore>,
}

impl AppServices {
    pub fn new(
        items: Arc<dyn RecordStore<InventoryItem>>,
        vendors: Arc<dyn RecordStore<Vendor>>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            items,
            vendors,
            profiles,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRecordStore::<InventoryItem>::new()),
            Arc::new(InMemoryRecordStore::<Vendor>::new()),
            Arc::new(InMemoryProfileStore::new()),
        )
    }

    pub fn postgres(store: PostgresStore) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store.clone(), store)
    }

    // -------------------------
    // Inventory
    // -------------------------

    pub async fn item_listing(&self, owner_id: OwnerId, search: Option<&str>) -> ServiceResult<ItemListing> {
        let snapshot = self.items.list(owner_id).await?;
        let low_stock_count = analytics::low_stock(&snapshot).len();
        let items = analytics::search_items(&snapshot, search.unwrap_or_default())
            .into_iter()
            .cloned()
            .collect();
        Ok(ItemListing {
            items,
            low_stock_count,
        })
    }

    pub async fn get_item(&self, owner_id: OwnerId, id: RecordId) -> ServiceResult<InventoryItem> {
        self.items
            .get(owner_id, id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::NotFound))
    }

    /// Create an item with a fresh code that no other item of the owner uses.
    pub async fn create_item(&self, owner_id: OwnerId, cmd: NewInventoryItem) -> ServiceResult<InventoryItem> {
        require_name("name", &cmd.name)?;

        let taken: HashSet<String> = self
            .items
            .list(owner_id)
            .await?
            .into_iter()
            .map(|item| item.code().to_string())
            .collect();

        let code = {
            let mut rng = rand::thread_rng();
            analytics::unique_item_identifier(&cmd.name, |c| taken.contains(c), &mut rng)
        }
        .ok_or_else(|| {
            DomainError::conflict(format!(
                "no free item code left for prefix '{}'",
                analytics::item_code::code_prefix(&cmd.name)
            ))
        })?;

        let item = InventoryItem::create(RecordId::new(), owner_id, code, cmd, Utc::now())?;
        let item = self.items.insert(item).await?;
        tracing::info!(owner_id = %owner_id, item_id = %item.id(), code = item.code(), "inventory item created");
        Ok(item)
    }

    pub async fn update_item(
        &self,
        owner_id: OwnerId,
        id: RecordId,
        patch: InventoryItemPatch,
    ) -> ServiceResult<InventoryItem> {
        let mut item = self.get_item(owner_id, id).await?;
        item.apply_patch(patch, Utc::now())?;
        Ok(self.items.update(item).await?)
    }

    pub async fn delete_item(&self, owner_id: OwnerId, id: RecordId) -> ServiceResult<()> {
        self.items.delete(owner_id, id).await?;
        tracing::info!(owner_id = %owner_id, item_id = %id, "inventory item deleted");
        Ok(())
    }

    pub async fn low_stock(&self, owner_id: OwnerId) -> ServiceResult<Vec<ReorderLine>> {
        let snapshot = self.items.list(owner_id).await?;
        Ok(analytics::reorder_recommendations(&snapshot))
    }

    // -------------------------
    // Vendors
    // -------------------------

    pub async fn vendor_listing(&self, owner_id: OwnerId, search: Option<&str>) -> ServiceResult<VendorListing> {
        let snapshot = self.vendors.list(owner_id).await?;
        let suggested = analytics::best_vendor(&snapshot).cloned();
        let vendors = analytics::search_vendors(&snapshot, search.unwrap_or_default())
            .into_iter()
            .cloned()
            .collect();
        Ok(VendorListing { vendors, suggested })
    }

    pub async fn suggested_vendor(&self, owner_id: OwnerId) -> ServiceResult<Option<Vendor>> {
        let snapshot = self.vendors.list(owner_id).await?;
        Ok(analytics::best_vendor(&snapshot).cloned())
    }

    pub async fn get_vendor(&self, owner_id: OwnerId, id: RecordId) -> ServiceResult<Vendor> {
        self.vendors
            .get(owner_id, id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::NotFound))
    }

    pub async fn create_vendor(&self, owner_id: OwnerId, cmd: NewVendor) -> ServiceResult<Vendor> {
        let vendor = Vendor::create(RecordId::new(), owner_id, cmd, Utc::now())?;
        let vendor = self.vendors.insert(vendor).await?;
        tracing::info!(owner_id = %owner_id, vendor_id = %vendor.id(), "vendor created");
        Ok(vendor)
    }

    pub async fn update_vendor(&self, owner_id: OwnerId, id: RecordId, patch: VendorPatch) -> ServiceResult<Vendor> {
        let mut vendor = self.get_vendor(owner_id, id).await?;
        vendor.apply_patch(patch, Utc::now())?;
        Ok(self.vendors.update(vendor).await?)
    }

    pub async fn set_vendor_verification(
        &self,
        owner_id: OwnerId,
        id: RecordId,
        verified: bool,
    ) -> ServiceResult<Vendor> {
        let mut vendor = self.get_vendor(owner_id, id).await?;
        vendor.set_verified(verified, Utc::now());
        let vendor = self.vendors.update(vendor).await?;
        tracing::info!(owner_id = %owner_id, vendor_id = %id, verified, "vendor verification changed");
        Ok(vendor)
    }

    pub async fn delete_vendor(&self, owner_id: OwnerId, id: RecordId) -> ServiceResult<()> {
        self.vendors.delete(owner_id, id).await?;
        tracing::info!(owner_id = %owner_id, vendor_id = %id, "vendor deleted");
        Ok(())
    }

    // -------------------------
    // Profile
    // -------------------------

    pub async fn get_profile(&self, owner_id: OwnerId) -> ServiceResult<Option<Profile>> {
        Ok(self.profiles.get(owner_id).await?)
    }

    /// Create the owner's profile on first save, replace its fields afterwards.
    pub async fn save_profile(&self, owner_id: OwnerId, cmd: ProfileUpsert) -> ServiceResult<Profile> {
        let now = Utc::now();
        let profile = match self.profiles.get(owner_id).await? {
            Some(mut existing) => {
                existing.apply(cmd, now);
                existing
            }
            None => Profile::create(RecordId::new(), owner_id, cmd, now),
        };
        Ok(self.profiles.upsert(profile).await?)
    }

    // -------------------------
    // Reports
    // -------------------------

    pub async fn report(&self, owner_id: OwnerId) -> ServiceResult<InventoryReport> {
        let items = self.items.list(owner_id).await?;
        let vendors = self.vendors.list(owner_id).await?;
        Ok(InventoryReport::build(&items, &vendors))
    }
}
