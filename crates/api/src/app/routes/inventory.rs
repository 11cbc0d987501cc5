use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use stockdesk_inventory::{InventoryItemPatch, NewInventoryItem};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::OwnerContext;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", get(get_item).patch(update_item).delete(delete_item))
        .route("/low-stock", get(low_stock))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    match services.item_listing(owner.owner_id(), query.search.as_deref()).await {
        Ok(listing) => {
            let items = listing.items.iter().map(dto::item_to_json).collect::<Vec<_>>();
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "items": items,
                    "low_stock_count": listing.low_stock_count,
                })),
            )
                .into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    payload: Result<Json<NewInventoryItem>, JsonRejection>,
) -> axum::response::Response {
    let body = match dto::json_body(payload) {
        Ok(b) => b,
        Err(res) => return res,
    };

    match services.create_item(owner.owner_id(), body).await {
        Ok(item) => (StatusCode::CREATED, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_record_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.get_item(owner.owner_id(), id).await {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    Path(id): Path<String>,
    payload: Result<Json<InventoryItemPatch>, JsonRejection>,
) -> axum::response::Response {
    let id = match dto::parse_record_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let patch = match dto::json_body(payload) {
        Ok(b) => b,
        Err(res) => return res,
    };

    match services.update_item(owner.owner_id(), id, patch).await {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_record_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.delete_item(owner.owner_id(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Low-stock items with their reorder recommendation, in list order.
pub async fn low_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
) -> axum::response::Response {
    match services.low_stock(owner.owner_id()).await {
        Ok(lines) => (StatusCode::OK, Json(serde_json::json!({ "items": lines }))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
