//! Record storage for the managed backend: owner-scoped CRUD over items,
//! vendors and profiles.
//!
//! Stores neither retry nor paginate; callers get a complete snapshot per
//! `list`.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod record_store;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryProfileStore, InMemoryRecordStore};
pub use postgres::PostgresStore;
pub use record_store::{ProfileStore, RecordStore};
