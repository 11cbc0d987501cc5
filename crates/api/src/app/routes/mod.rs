use axum::{Router, routing::get};

pub mod inventory;
pub mod profile;
pub mod reports;
pub mod system;
pub mod vendors;

/// Router for all authenticated (owner-scoped) endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/profile", get(profile::get_profile).put(profile::save_profile))
        .route("/reports", get(reports::get_report))
        .nest("/inventory", inventory::router())
        .nest("/vendors", vendors::router())
}
