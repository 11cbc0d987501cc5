use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::error::require_name;
use stockdesk_core::{DomainError, DomainResult, OwnerId, Record, RecordId};

/// What a vendor supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorCategory {
    Textiles,
    Electronics,
    #[serde(rename = "Raw Materials")]
    RawMaterials,
    Packaging,
    #[serde(rename = "Food & Beverages")]
    FoodAndBeverages,
    Chemicals,
    Machinery,
}

impl VendorCategory {
    pub const ALL: [VendorCategory; 7] = [
        VendorCategory::Textiles,
        VendorCategory::Electronics,
        VendorCategory::RawMaterials,
        VendorCategory::Packaging,
        VendorCategory::FoodAndBeverages,
        VendorCategory::Chemicals,
        VendorCategory::Machinery,
    ];

    /// Display label, also the stored and serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            VendorCategory::Textiles => "Textiles",
            VendorCategory::Electronics => "Electronics",
            VendorCategory::RawMaterials => "Raw Materials",
            VendorCategory::Packaging => "Packaging",
            VendorCategory::FoodAndBeverages => "Food & Beverages",
            VendorCategory::Chemicals => "Chemicals",
            VendorCategory::Machinery => "Machinery",
        }
    }
}

impl core::fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for VendorCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VendorCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown vendor category '{s}'")))
    }
}

/// Price band a vendor sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Low,
    Medium,
    High,
    Premium,
}

impl PriceTier {
    pub const ALL: [PriceTier; 4] = [PriceTier::Low, PriceTier::Medium, PriceTier::High, PriceTier::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Low => "low",
            PriceTier::Medium => "medium",
            PriceTier::High => "high",
            PriceTier::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::Low => "$ (Low)",
            PriceTier::Medium => "$$ (Medium)",
            PriceTier::High => "$$$ (High)",
            PriceTier::Premium => "$$$$ (Premium)",
        }
    }
}

impl core::str::FromStr for PriceTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceTier::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown price tier '{s}'")))
    }
}

/// Vendor rating, 1 to 5 stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    pub fn new(value: u8) -> DomainResult<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be between 1 and 5 (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Contact information for a vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Record: Vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    id: RecordId,
    owner_id: OwnerId,
    name: String,
    category: VendorCategory,
    rating: Rating,
    price_tier: Option<PriceTier>,
    contact: ContactInfo,
    verified: bool,
    last_order_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Command: register a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVendor {
    pub name: String,
    pub category: VendorCategory,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub price_tier: Option<PriceTier>,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
}

/// Command: edit vendor details. `None` keeps the existing value.
///
/// Verification is not patchable; see [`Vendor::set_verified`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<VendorCategory>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub price_tier: Option<PriceTier>,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
    #[serde(default)]
    pub last_order_date: Option<DateTime<Utc>>,
}

impl Vendor {
    /// Validate a register command and build the record. New vendors start
    /// unverified.
    pub fn create(id: RecordId, owner_id: OwnerId, cmd: NewVendor, now: DateTime<Utc>) -> DomainResult<Self> {
        require_name("name", &cmd.name)?;

        Ok(Self {
            id,
            owner_id,
            name: cmd.name.trim().to_string(),
            category: cmd.category,
            rating: cmd.rating.unwrap_or_default(),
            price_tier: cmd.price_tier,
            contact: cmd.contact.unwrap_or_default(),
            verified: false,
            last_order_date: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a record from storage without re-running create validation.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RecordId,
        owner_id: OwnerId,
        name: String,
        category: VendorCategory,
        rating: Rating,
        price_tier: Option<PriceTier>,
        contact: ContactInfo,
        verified: bool,
        last_order_date: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            category,
            rating,
            price_tier,
            contact,
            verified,
            last_order_date,
            created_at,
            updated_at,
        }
    }

    pub fn apply_patch(&mut self, patch: VendorPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(name) = &patch.name {
            require_name("name", name)?;
        }

        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(price_tier) = patch.price_tier {
            self.price_tier = Some(price_tier);
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(last_order_date) = patch.last_order_date {
            self.last_order_date = Some(last_order_date);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Set the verification flag. Only an explicit verification decision
    /// changes it; edits and creation never do.
    pub fn set_verified(&mut self, verified: bool, now: DateTime<Utc>) {
        self.verified = verified;
        self.updated_at = now;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> VendorCategory {
        self.category
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn price_tier(&self) -> Option<PriceTier> {
        self.price_tier
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn last_order_date(&self) -> Option<DateTime<Utc>> {
        self.last_order_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for Vendor {
    fn id(&self) -> RecordId {
        self.id
    }

    fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    fn listed_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
