//! HTTP application wiring (Axum router + shared service state).
//!
//! The folder is structured like:
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request payloads and their validation
//! - `params.rs`: query string parsing (paging, sorting, filters)
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, http::StatusCode, routing::get};
use tower::ServiceBuilder;

use stockroom_store::InventoryService;

pub mod dto;
pub mod errors;
pub mod params;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(service: Arc<InventoryService>) -> Router {
    let api = routes::router().layer(Extension(service));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(ServiceBuilder::new())
}

async fn health() -> StatusCode {
    StatusCode::OK
}
