use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockdesk_core::DomainError;
use stockdesk_store::StoreError;

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::Store(StoreError::NotFound) => not_found(),
        ServiceError::Store(StoreError::Conflict(msg)) => json_error(StatusCode::CONFLICT, "conflict", msg),
        ServiceError::Store(StoreError::Backend(msg)) => {
            tracing::error!(error = %msg, "record store failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "the record store could not complete the request",
            )
        }
    }
}

fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => not_found(),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "not found")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        service_error_to_response(err).status()
    }

    #[test]
    fn errors_map_to_documented_statuses() {
        assert_eq!(status_of(DomainError::validation("x").into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DomainError::invalid_id("x").into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DomainError::NotFound.into()), StatusCode::NOT_FOUND);
        assert_eq!(status_of(StoreError::NotFound.into()), StatusCode::NOT_FOUND);
        assert_eq!(status_of(DomainError::conflict("x").into()), StatusCode::CONFLICT);
        assert_eq!(status_of(StoreError::Conflict("dup".into()).into()), StatusCode::CONFLICT);
        assert_eq!(
            status_of(StoreError::backend("down").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
