use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, OwnerId, Record, RecordId};

/// Industry a business operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Textiles,
    Manufacturing,
    #[serde(rename = "FMCG")]
    Fmcg,
    #[serde(rename = "Food Processing")]
    FoodProcessing,
    Automotive,
    Electronics,
    Pharmaceuticals,
    Chemicals,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 9] = [
        Industry::Textiles,
        Industry::Manufacturing,
        Industry::Fmcg,
        Industry::FoodProcessing,
        Industry::Automotive,
        Industry::Electronics,
        Industry::Pharmaceuticals,
        Industry::Chemicals,
        Industry::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Textiles => "Textiles",
            Industry::Manufacturing => "Manufacturing",
            Industry::Fmcg => "FMCG",
            Industry::FoodProcessing => "Food Processing",
            Industry::Automotive => "Automotive",
            Industry::Electronics => "Electronics",
            Industry::Pharmaceuticals => "Pharmaceuticals",
            Industry::Chemicals => "Chemicals",
            Industry::Other => "Other",
        }
    }
}

impl core::str::FromStr for Industry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .into_iter()
            .find(|i| i.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown industry '{s}'")))
    }
}

/// Record: Profile. At most one per owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    id: RecordId,
    owner_id: OwnerId,
    company_name: Option<String>,
    industry: Option<Industry>,
    phone: Option<String>,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Command: save the settings form. Every field is replaced, blank strings
/// clear the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpsert {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub industry: Option<Industry>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Profile {
    pub fn create(id: RecordId, owner_id: OwnerId, cmd: ProfileUpsert, now: DateTime<Utc>) -> Self {
        let mut profile = Self {
            id,
            owner_id,
            company_name: None,
            industry: None,
            phone: None,
            address: None,
            created_at: now,
            updated_at: now,
        };
        profile.apply(cmd, now);
        profile
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RecordId,
        owner_id: OwnerId,
        company_name: Option<String>,
        industry: Option<Industry>,
        phone: Option<String>,
        address: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            company_name,
            industry,
            phone,
            address,
            created_at,
            updated_at,
        }
    }

    pub fn apply(&mut self, cmd: ProfileUpsert, now: DateTime<Utc>) {
        self.company_name = non_blank(cmd.company_name);
        self.industry = cmd.industry;
        self.phone = non_blank(cmd.phone);
        self.address = non_blank(cmd.address);
        self.updated_at = now;
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    pub fn industry(&self) -> Option<Industry> {
        self.industry
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for Profile {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()
    }

    #[test]
    fn blank_fields_are_stored_as_absent() {
        let profile = Profile::create(
            RecordId::from_uuid(Uuid::from_u128(1)),
            OwnerId::from_uuid(Uuid::from_u128(2)),
            ProfileUpsert {
                company_name: Some(" Acme Mills ".to_string()),
                industry: Some(Industry::Textiles),
                phone: Some("   ".to_string()),
                address: None,
            },
            test_time(),
        );

        assert_eq!(profile.company_name(), Some("Acme Mills"));
        assert_eq!(profile.industry(), Some(Industry::Textiles));
        assert_eq!(profile.phone(), None);
        assert_eq!(profile.address(), None);
    }

    #[test]
    fn apply_replaces_every_field() {
        let mut profile = Profile::create(
            RecordId::from_uuid(Uuid::from_u128(1)),
            OwnerId::from_uuid(Uuid::from_u128(2)),
            ProfileUpsert {
                company_name: Some("Acme".to_string()),
                industry: Some(Industry::Fmcg),
                phone: Some("+91 555".to_string()),
                address: Some("Pune".to_string()),
            },
            test_time(),
        );
        let later = test_time() + chrono::Duration::days(1);

        profile.apply(
            ProfileUpsert {
                company_name: Some("Acme Foods".to_string()),
                ..Default::default()
            },
            later,
        );

        assert_eq!(profile.company_name(), Some("Acme Foods"));
        assert_eq!(profile.industry(), None);
        assert_eq!(profile.phone(), None);
        assert_eq!(profile.updated_at(), later);
        assert_eq!(profile.created_at(), test_time());
    }

    #[test]
    fn industry_labels_parse() {
        assert_eq!("Food Processing".parse::<Industry>().unwrap(), Industry::FoodProcessing);
        assert_eq!("FMCG".parse::<Industry>().unwrap(), Industry::Fmcg);
        assert!("Mining".parse::<Industry>().is_err());
    }
}
