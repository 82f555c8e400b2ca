//! Error model for the inventory store.

use thiserror::Error;

/// Result type used across the store and its boundary.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Keep this focused on deterministic failures of the store and its query
/// surface. Transport concerns (status codes, response bodies) belong to
/// the boundary layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A field failed validation (e.g. blank name, non-positive price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record exists for the given identifier.
    #[error("product not found")]
    NotFound,

    /// A sort key referenced a property outside the sortable registry.
    #[error("unsupported sort property: {0}")]
    UnsupportedSortProperty(String),

    /// An availability token was not one of `in_stock`, `out_of_stock`, `all`.
    #[error("unrecognized availability value: {0}")]
    UnrecognizedAvailability(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The underlying store could not be accessed (poisoned lock).
    #[error("store access failed: {0}")]
    Store(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn unsupported_sort_property(key: impl Into<String>) -> Self {
        Self::UnsupportedSortProperty(key.into())
    }

    pub fn unrecognized_availability(token: impl Into<String>) -> Self {
        Self::UnrecognizedAvailability(token.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_offending_token() {
        let err = InventoryError::unsupported_sort_property("brand");
        assert_eq!(err.to_string(), "unsupported sort property: brand");

        let err = InventoryError::unrecognized_availability("sold_out");
        assert_eq!(err.to_string(), "unrecognized availability value: sold_out");
    }

    #[test]
    fn not_found_is_comparable() {
        assert_eq!(InventoryError::not_found(), InventoryError::NotFound);
    }
}
