//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: owner-scoped use cases over the record stores
//! - `routes/`: HTTP routes + handlers (one file per view)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use stockdesk_store::{PostgresStore, StoreError};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Uses the Postgres store when `DATABASE_URL` is configured and the
/// in-memory store otherwise.
pub async fn build_app(config: &ApiConfig) -> Result<Router, StoreError> {
    let services = match &config.database_url {
        Some(url) => {
            let store = PostgresStore::connect(url, config.max_connections).await?;
            store.ensure_schema().await?;
            tracing::info!("using postgres record store");
            AppServices::postgres(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; records are kept in memory only");
            AppServices::in_memory()
        }
    };

    Ok(router(&config.jwt_secret, services))
}

/// Router over the given services, verifying bearer tokens with `jwt_secret`.
pub fn router(jwt_secret: &str, services: AppServices) -> Router {
    let jwt = Arc::new(stockdesk_auth::Hs256JwtValidator::new(jwt_secret));
    let auth_state = middleware::AuthState { jwt };

    // Protected routes: require a valid token, which supplies the owner.
    let protected = routes::router()
        .layer(Extension(Arc::new(services)))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_requests)))
}
