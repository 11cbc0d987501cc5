use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_core::error::require_name;
use stockdesk_core::{DomainError, DomainResult, OwnerId, Record, RecordId};

/// Reorder level applied when the caller does not provide one.
pub const DEFAULT_REORDER_LEVEL: u32 = 10;

/// Unit an item is counted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Pcs,
    Kg,
    Ltr,
    Mtr,
    Box,
    Pack,
}

impl Unit {
    pub const ALL: [Unit; 6] = [Unit::Pcs, Unit::Kg, Unit::Ltr, Unit::Mtr, Unit::Box, Unit::Pack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Pcs => "pcs",
            Unit::Kg => "kg",
            Unit::Ltr => "ltr",
            Unit::Mtr => "mtr",
            Unit::Box => "box",
            Unit::Pack => "pack",
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown unit '{s}'")))
    }
}

/// Record: InventoryItem.
///
/// Fields are private so the owner and id cannot change after creation; edits
/// go through [`InventoryItem::apply_patch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    id: RecordId,
    owner_id: OwnerId,
    name: String,
    code: String,
    stock_count: u32,
    unit: Unit,
    reorder_level: u32,
    price_per_unit: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Command: create an item (form submission).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub stock_count: u32,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(default)]
    pub reorder_level: Option<u32>,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
}

/// Command: edit an item. `None` keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stock_count: Option<u32>,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(default)]
    pub reorder_level: Option<u32>,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
}

fn require_price(price: Decimal) -> DomainResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(DomainError::validation("price_per_unit cannot be negative"));
    }
    Ok(())
}

impl InventoryItem {
    /// Validate a create command and build the record.
    ///
    /// The item code is produced by the caller (it depends on the owner's
    /// existing codes) and is kept for the lifetime of the record.
    pub fn create(
        id: RecordId,
        owner_id: OwnerId,
        code: impl Into<String>,
        cmd: NewInventoryItem,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        require_name("name", &cmd.name)?;
        let price_per_unit = cmd.price_per_unit.unwrap_or(Decimal::ZERO);
        require_price(price_per_unit)?;

        Ok(Self {
            id,
            owner_id,
            name: cmd.name.trim().to_string(),
            code: code.into(),
            stock_count: cmd.stock_count,
            unit: cmd.unit.unwrap_or_default(),
            reorder_level: cmd.reorder_level.unwrap_or(DEFAULT_REORDER_LEVEL),
            price_per_unit,
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
        code: String,
        stock_count: u32,
        unit: Unit,
        reorder_level: u32,
        price_per_unit: Decimal,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            code,
            stock_count,
            unit,
            reorder_level,
            price_per_unit,
            created_at,
            updated_at,
        }
    }

    /// Apply an edit. Validation happens before any field changes, so a
    /// rejected patch leaves the record untouched.
    pub fn apply_patch(&mut self, patch: InventoryItemPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(name) = &patch.name {
            require_name("name", name)?;
        }
        if let Some(price) = patch.price_per_unit {
            require_price(price)?;
        }

        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(stock_count) = patch.stock_count {
            self.stock_count = stock_count;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(reorder_level) = patch.reorder_level {
            self.reorder_level = reorder_level;
        }
        if let Some(price) = patch.price_per_unit {
            self.price_per_unit = price;
        }
        self.updated_at = now;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn stock_count(&self) -> u32 {
        self.stock_count
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn reorder_level(&self) -> u32 {
        self.reorder_level
    }

    pub fn price_per_unit(&self) -> Decimal {
        self.price_per_unit
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for InventoryItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    fn listed_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
