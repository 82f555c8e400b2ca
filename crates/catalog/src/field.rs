use core::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use stockroom_core::{InventoryError, InventoryResult, ProductId};

use crate::product::Product;

/// The closed registry of sortable product properties.
///
/// Sort keys arrive as strings; [`ProductField::parse`] resolves them to a
/// typed accessor or fails fast, before any record is touched. Both the
/// snake_case token and the legacy camelCase alias are accepted for the
/// multiword fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Name,
    Category,
    UnitPrice,
    ExpirationDate,
    QuantityInStock,
    /// Derived: unit price x quantity. Sortable even though never stored.
    StockValue,
    CreatedAt,
    UpdatedAt,
}

impl ProductField {
    pub const ALL: [ProductField; 9] = [
        Self::Id,
        Self::Name,
        Self::Category,
        Self::UnitPrice,
        Self::ExpirationDate,
        Self::QuantityInStock,
        Self::StockValue,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    pub fn parse(token: &str) -> InventoryResult<Self> {
        match token {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "unit_price" | "unitPrice" => Ok(Self::UnitPrice),
            "expiration_date" | "expirationDate" => Ok(Self::ExpirationDate),
            "quantity_in_stock" | "quantityInStock" => Ok(Self::QuantityInStock),
            "stock_value" | "stockValue" => Ok(Self::StockValue),
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            "updated_at" | "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(InventoryError::unsupported_sort_property(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "category",
            Self::UnitPrice => "unit_price",
            Self::ExpirationDate => "expiration_date",
            Self::QuantityInStock => "quantity_in_stock",
            Self::StockValue => "stock_value",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    /// The record's comparable value for this property.
    ///
    /// `None` only when the property is genuinely absent; of the registry,
    /// only `expiration_date` can be.
    pub fn sort_value<'a>(&self, product: &'a Product) -> Option<SortValue<'a>> {
        match self {
            Self::Id => Some(SortValue::Id(product.id)),
            Self::Name => Some(SortValue::Text(&product.name)),
            Self::Category => Some(SortValue::Text(&product.category)),
            Self::UnitPrice => Some(SortValue::Decimal(product.unit_price)),
            Self::ExpirationDate => product.expiration_date.map(SortValue::Date),
            Self::QuantityInStock => Some(SortValue::Quantity(product.quantity_in_stock)),
            Self::StockValue => Some(SortValue::Decimal(product.stock_value())),
            Self::CreatedAt => Some(SortValue::Date(product.created_at)),
            Self::UpdatedAt => Some(SortValue::Date(product.updated_at)),
        }
    }
}

/// A property value lifted into a comparable form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortValue<'a> {
    Id(ProductId),
    Text(&'a str),
    Decimal(Decimal),
    Date(NaiveDate),
    Quantity(u32),
}

impl SortValue<'_> {
    /// Natural (ascending) order between two values of the same property.
    ///
    /// Values taken from the same field always share a variant; a mixed
    /// pair compares equal rather than panicking.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Id(a), Self::Id(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Decimal(a), Self::Decimal(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Quantity(a), Self::Quantity(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}
