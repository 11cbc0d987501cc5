//! Business profile attached one-to-one to a user account.

pub mod profile;

pub use profile::{Industry, Profile, ProfileUpsert};
