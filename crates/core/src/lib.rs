//! `stockdesk-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the record crates
//! (no storage, no HTTP).

pub mod error;
pub mod id;
pub mod record;

pub use error::{DomainError, DomainResult};
pub use id::{OwnerId, RecordId};
pub use record::Record;
