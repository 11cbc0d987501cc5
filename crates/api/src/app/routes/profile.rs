use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use stockdesk_profiles::ProfileUpsert;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::OwnerContext;

pub async fn get_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
) -> axum::response::Response {
    match services.get_profile(owner.owner_id()).await {
        Ok(Some(profile)) => (StatusCode::OK, Json(dto::profile_to_json(&profile))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "profile not set up yet"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn save_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(owner): Extension<OwnerContext>,
    payload: Result<Json<ProfileUpsert>, JsonRejection>,
) -> axum::response::Response {
    let body = match dto::json_body(payload) {
        Ok(b) => b,
        Err(res) => return res,
    };

    match services.save_profile(owner.owner_id(), body).await {
        Ok(profile) => (StatusCode::OK, Json(dto::profile_to_json(&profile))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
