use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use stockdesk_analytics::stock_status;
use stockdesk_core::{Record, RecordId};
use stockdesk_inventory::InventoryItem;
use stockdesk_profiles::Profile;
use stockdesk_vendors::Vendor;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// `?search=` on list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerificationRequest {
    pub verified: bool,
}

/// Unwrap a JSON body, turning axum's rejection into the API's error shape.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, axum::response::Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            rejection.body_text(),
        )),
    }
}

pub fn parse_record_id(raw: &str) -> Result<RecordId, axum::response::Response> {
    raw.parse::<RecordId>()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid record id"))
}

// -------------------------
// Response mapping
// -------------------------

pub fn item_to_json(item: &InventoryItem) -> Value {
    json!({
        "id": item.id().to_string(),
        "name": item.name(),
        "code": item.code(),
        "stock_count": item.stock_count(),
        "unit": item.unit(),
        "reorder_level": item.reorder_level(),
        "price_per_unit": item.price_per_unit(),
        "status": stock_status(item),
        "created_at": item.created_at(),
        "updated_at": item.updated_at(),
    })
}

pub fn vendor_to_json(vendor: &Vendor) -> Value {
    let contact = vendor.contact();
    json!({
        "id": vendor.id().to_string(),
        "name": vendor.name(),
        "category": vendor.category(),
        "rating": vendor.rating(),
        "price_tier": vendor.price_tier(),
        "price_tier_label": vendor.price_tier().map(|t| t.label()),
        "contact": {
            "email": contact.email,
            "phone": contact.phone,
            "address": contact.address,
        },
        "verified": vendor.is_verified(),
        "last_order_date": vendor.last_order_date(),
        "created_at": vendor.created_at(),
        "updated_at": vendor.updated_at(),
    })
}

pub fn profile_to_json(profile: &Profile) -> Value {
    json!({
        "id": profile.id().to_string(),
        "company_name": profile.company_name(),
        "industry": profile.industry(),
        "phone": profile.phone(),
        "address": profile.address(),
        "created_at": profile.created_at(),
        "updated_at": profile.updated_at(),
    })
}
