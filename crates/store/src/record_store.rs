use async_trait::async_trait;

use stockdesk_core::{OwnerId, Record, RecordId};
use stockdesk_profiles::Profile;

use crate::error::StoreResult;

/// Owner-scoped CRUD over one record kind.
///
/// Every read filters by owner; a record belonging to someone else is
/// indistinguishable from a missing one.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// All records of the owner, newest first (see [`Record::listed_at`]).
    async fn list(&self, owner_id: OwnerId) -> StoreResult<Vec<R>>;

    async fn get(&self, owner_id: OwnerId, id: RecordId) -> StoreResult<Option<R>>;

    /// Store a new record. Fails with `Conflict` if the id is already used.
    async fn insert(&self, record: R) -> StoreResult<R>;

    /// Replace an existing record (last write wins). Fails with `NotFound` if
    /// the owner has no record with that id.
    async fn update(&self, record: R) -> StoreResult<R>;

    async fn delete(&self, owner_id: OwnerId, id: RecordId) -> StoreResult<()>;
}

/// One profile per owner.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, owner_id: OwnerId) -> StoreResult<Option<Profile>>;

    /// Create the owner's profile, or overwrite the existing one.
    async fn upsert(&self, profile: Profile) -> StoreResult<Profile>;
}
