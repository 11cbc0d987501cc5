//! In-memory stores for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use stockdesk_core::record::sort_for_listing;
use stockdesk_core::{OwnerId, Record, RecordId};
use stockdesk_profiles::Profile;

use crate::error::{StoreError, StoreResult};
use crate::record_store::{ProfileStore, RecordStore};

fn poisoned() -> StoreError {
    StoreError::backend("in-memory store lock poisoned")
}

/// Owner-isolated in-memory record store.
#[derive(Debug)]
pub struct InMemoryRecordStore<R> {
    inner: RwLock<HashMap<(OwnerId, RecordId), R>>,
}

impl<R> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<R> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn list(&self, owner_id: OwnerId) -> StoreResult<Vec<R>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut records: Vec<R> = map
            .iter()
            .filter_map(|((o, _id), r)| if *o == owner_id { Some(r.clone()) } else { None })
            .collect();
        sort_for_listing(&mut records);
        Ok(records)
    }

    async fn get(&self, owner_id: OwnerId, id: RecordId) -> StoreResult<Option<R>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(&(owner_id, id)).cloned())
    }

    async fn insert(&self, record: R) -> StoreResult<R> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let key = (record.owner_id(), record.id());
        if map.contains_key(&key) {
            return Err(StoreError::Conflict(format!("record {} already exists", record.id())));
        }
        map.insert(key, record.clone());
        Ok(record)
    }

    async fn update(&self, record: R) -> StoreResult<R> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        match map.get_mut(&(record.owner_id(), record.id())) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, owner_id: OwnerId, id: RecordId) -> StoreResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(&(owner_id, id)).map(|_| ()).ok_or(StoreError::NotFound)
    }
}

/// In-memory profile store, keyed by owner.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    inner: RwLock<HashMap<OwnerId, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, owner_id: OwnerId) -> StoreResult<Option<Profile>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(&owner_id).cloned())
    }

    async fn upsert(&self, profile: Profile) -> StoreResult<Profile> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(profile.owner_id(), profile.clone());
        Ok(profile)
    }
}
