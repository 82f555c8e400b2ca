use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::InventoryError;

use crate::app::dto::FieldError;

pub fn error_to_response(err: InventoryError) -> axum::response::Response {
    match err {
        InventoryError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        InventoryError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        err @ InventoryError::UnsupportedSortProperty(_) => {
            json_error(StatusCode::BAD_REQUEST, "unsupported_sort_property", err.to_string())
        }
        err @ InventoryError::UnrecognizedAvailability(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_availability", err.to_string())
        }
        err @ InventoryError::InvalidId(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", err.to_string())
        }
        InventoryError::Store(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg),
    }
}

/// Body validation failures report every offending field at once, keyed by
/// field name, so clients can render them next to the matching inputs.
pub fn validation_failure(fields: &[FieldError]) -> axum::response::Response {
    let details: serde_json::Map<String, serde_json::Value> = fields
        .iter()
        .map(|f| (f.field.to_string(), json!(f.message)))
        .collect();

    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "message": "validation failed",
            "fields": details,
        })),
    )
        .into_response()
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
