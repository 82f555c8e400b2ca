use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use stockroom_catalog::{NAME_MAX_LEN, ProductDraft};

/// Incoming product payload for create and update.
///
/// Every field is optional at the wire level; [`ProductRequest::into_draft`]
/// decides what is actually required and collects all violations in one pass.
#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<Decimal>,
    pub expiration_date: Option<NaiveDate>,
    pub quantity_in_stock: Option<i64>,
}

/// One rejected field plus a human readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl ProductRequest {
    /// Validates the payload against `today` and produces a draft, or the
    /// full list of field errors. At most one error is reported per field.
    pub fn into_draft(self, today: NaiveDate) -> Result<ProductDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = match self.name {
            Some(name) => {
                if name.trim().is_empty() {
                    errors.push(FieldError::new("name", "name must not be blank"));
                } else if name.chars().count() > NAME_MAX_LEN {
                    errors.push(FieldError::new(
                        "name",
                        format!("name must be at most {NAME_MAX_LEN} characters"),
                    ));
                }
                name
            }
            None => {
                errors.push(FieldError::new("name", "name is required"));
                String::new()
            }
        };

        let category = match self.category {
            Some(category) => {
                if category.trim().is_empty() {
                    errors.push(FieldError::new("category", "category must not be blank"));
                }
                category
            }
            None => {
                errors.push(FieldError::new("category", "category is required"));
                String::new()
            }
        };

        let unit_price = match self.unit_price {
            Some(price) if price > Decimal::ZERO => price,
            Some(_) => {
                errors.push(FieldError::new(
                    "unit_price",
                    "unit price must be greater than zero",
                ));
                Decimal::ZERO
            }
            None => {
                errors.push(FieldError::new("unit_price", "unit price is required"));
                Decimal::ZERO
            }
        };

        if let Some(date) = self.expiration_date {
            if date < today {
                errors.push(FieldError::new(
                    "expiration_date",
                    "expiration date must not be in the past",
                ));
            }
        }

        let quantity_in_stock = match self.quantity_in_stock {
            Some(quantity) => match u32::try_from(quantity) {
                Ok(quantity) => quantity,
                Err(_) if quantity < 0 => {
                    errors.push(FieldError::new(
                        "quantity_in_stock",
                        "quantity in stock must not be negative",
                    ));
                    0
                }
                Err(_) => {
                    errors.push(FieldError::new(
                        "quantity_in_stock",
                        "quantity in stock is too large",
                    ));
                    0
                }
            },
            None => {
                errors.push(FieldError::new(
                    "quantity_in_stock",
                    "quantity in stock is required",
                ));
                0
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductDraft {
            name,
            category,
            unit_price,
            expiration_date: self.expiration_date,
            quantity_in_stock,
        })
    }
}
