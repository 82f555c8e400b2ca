use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use stockroom_core::ProductId;
use stockroom_store::{InventoryService, ProductFilter};

use crate::app::{dto, errors, params};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/search", get(search_products))
        .route("/categories", get(list_categories))
        .route("/metrics", get(list_metrics))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/outofstock", post(mark_out_of_stock))
        .route("/:id/instock", post(mark_in_stock))
}

pub async fn create_product(
    Extension(service): Extension<Arc<InventoryService>>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let today = Utc::now().date_naive();
    let draft = match body.into_draft(today) {
        Ok(draft) => draft,
        Err(fields) => return errors::validation_failure(&fields),
    };

    match service.create(draft, today) {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn list_products(
    Extension(service): Extension<Arc<InventoryService>>,
    Query(query): Query<params::ListQuery>,
) -> axum::response::Response {
    let page = match params::page_request(query.page, query.size) {
        Ok(page) => page,
        Err(e) => return errors::error_to_response(e),
    };
    let sort = match params::parse_sort(query.sort.as_deref()) {
        Ok(sort) => sort,
        Err(e) => return errors::error_to_response(e),
    };

    match service.list(&sort, page) {
        Ok(listing) => (StatusCode::OK, Json(listing)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn search_products(
    Extension(service): Extension<Arc<InventoryService>>,
    Query(query): Query<params::SearchQuery>,
) -> axum::response::Response {
    let page = match params::page_request(query.page, query.size) {
        Ok(page) => page,
        Err(e) => return errors::error_to_response(e),
    };
    let sort = match params::parse_sort(query.sort.as_deref()) {
        Ok(sort) => sort,
        Err(e) => return errors::error_to_response(e),
    };
    let availability = match params::parse_availability(query.availability.as_deref()) {
        Ok(availability) => availability,
        Err(e) => return errors::error_to_response(e),
    };

    let filter = ProductFilter {
        name: query.name,
        categories: params::parse_categories(query.categories.as_deref()),
        availability,
    };

    match service.search(&filter, &sort, page) {
        Ok(matches) => (StatusCode::OK, Json(matches)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn get_product(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_to_response(e),
    };

    match service.get(&id) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn update_product(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_to_response(e),
    };

    let today = Utc::now().date_naive();
    let draft = match body.into_draft(today) {
        Ok(draft) => draft,
        Err(fields) => return errors::validation_failure(&fields),
    };

    match service.update(&id, draft, today) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_to_response(e),
    };

    match service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn mark_out_of_stock(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_to_response(e),
    };

    match service.mark_out_of_stock(&id, Utc::now().date_naive()) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn mark_in_stock(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_to_response(e),
    };

    match service.mark_in_stock(&id, Utc::now().date_naive()) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn list_categories(
    Extension(service): Extension<Arc<InventoryService>>,
) -> axum::response::Response {
    match service.categories() {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn list_metrics(
    Extension(service): Extension<Arc<InventoryService>>,
) -> axum::response::Response {
    match service.metrics() {
        Ok(metrics) => (StatusCode::OK, Json(metrics)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}
