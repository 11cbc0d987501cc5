use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use stockdesk_vendors::{NewVendor, VendorPatch};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::OwnerContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_vendors).post(create_vendor))
        .route("/suggested", get(suggested_vendor))
        .route("/:id", get(get_vendor).patch(update_vendor).delete(delete_vendor))
        .route("/:id/verification", put(set_verification))
}

pub async fn list_vendors(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    match services.vendor_listing(owner.owner_id(), query.search.as_deref()).await {
        Ok(listing) => {
            let items = listing.vendors.iter().map(dto::vendor_to_json).collect::<Vec<_>>();
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "items": items,
                    "suggested": listing.suggested.as_ref().map(dto::vendor_to_json),
                })),
            )
                .into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn suggested_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
) -> axum::response::Response {
    match services.suggested_vendor(owner.owner_id()).await {
        Ok(Some(vendor)) => (StatusCode::OK, Json(dto::vendor_to_json(&vendor))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "no vendors yet"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn create_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    payload: Result<Json<NewVendor>, JsonRejection>,
) -> axum::response::Response {
    let body = match dto::json_body(payload) {
        Ok(b) => b,
        Err(res) => return res,
    };

    match services.create_vendor(owner.owner_id(), body).await {
        Ok(vendor) => (StatusCode::CREATED, Json(dto::vendor_to_json(&vendor))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_record_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.get_vendor(owner.owner_id(), id).await {
        Ok(vendor) => (StatusCode::OK, Json(dto::vendor_to_json(&vendor))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    Path(id): Path<String>,
    payload: Result<Json<VendorPatch>, JsonRejection>,
) -> axum::response::Response {
    let id = match dto::parse_record_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let patch = match dto::json_body(payload) {
        Ok(b) => b,
        Err(res) => return res,
    };

    match services.update_vendor(owner.owner_id(), id, patch).await {
        Ok(vendor) => (StatusCode::OK, Json(dto::vendor_to_json(&vendor))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn set_verification(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    Path(id): Path<String>,
    payload: Result<Json<dto::VerificationRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match dto::parse_record_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let body = match dto::json_body(payload) {
        Ok(b) => b,
        Err(res) => return res,
    };

    match services.set_vendor_verification(owner.owner_id(), id, body.verified).await {
        Ok(vendor) => (StatusCode::OK, Json(dto::vendor_to_json(&vendor))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_record_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.delete_vendor(owner.owner_id(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
