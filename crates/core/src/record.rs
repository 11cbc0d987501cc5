//! Record trait: identity + ownership for rows kept by a record store.

use chrono::{DateTime, Utc};

use crate::id::{OwnerId, RecordId};

/// A row owned by exactly one user account.
///
/// The owner is fixed at creation and never reassigned; stores use it to scope
/// every read and write.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> RecordId;

    fn owner_id(&self) -> OwnerId;

    /// Timestamp lists are ordered by, newest first.
    fn listed_at(&self) -> DateTime<Utc>;
}

/// Sort a snapshot the way every store lists records: newest `listed_at` first,
/// ties broken by id (UUIDv7, so also newest first).
pub fn sort_for_listing<R: Record>(records: &mut [R]) {
    records.sort_by(|a, b| {
        b.listed_at()
            .cmp(&a.listed_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}
