//! Vendors domain module.
//!
//! Vendor records (suppliers an MSME buys from), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod vendor;

pub use vendor::{
    ContactInfo, NewVendor, PriceTier, Rating, Vendor, VendorCategory, VendorPatch,
};
