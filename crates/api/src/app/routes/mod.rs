use axum::Router;

pub mod products;

/// Router for all inventory endpoints, mounted under `/api`.
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}
