use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use stockroom_core::ProductId;

/// Longest name the boundary accepts.
pub const NAME_MAX_LEN: usize = 120;

/// Quantity applied by the mark-in-stock transition.
pub const RESTOCK_QUANTITY: u32 = 10;

/// Quantity applied by the mark-out-of-stock transition.
pub const OUT_OF_STOCK_QUANTITY: u32 = 0;

/// Caller-settable fields of a product, already validated by the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub expiration_date: Option<NaiveDate>,
    pub quantity_in_stock: u32,
}

/// A stored product record.
///
/// The store hands out clones; mutating one does not touch the stored copy.
/// `created_at` is set once at creation and never changes; `updated_at`
/// moves on every mutation and is always >= `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub expiration_date: Option<NaiveDate>,
    pub quantity_in_stock: u32,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Product {
    /// Build a brand-new record from a validated draft.
    pub fn create(id: ProductId, draft: ProductDraft, today: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            unit_price: draft.unit_price,
            expiration_date: draft.expiration_date,
            quantity_in_stock: draft.quantity_in_stock,
            created_at: today,
            updated_at: today,
        }
    }

    /// Replace every caller-settable field; id and `created_at` are kept.
    pub fn apply_draft(&mut self, draft: ProductDraft, today: NaiveDate) {
        self.name = draft.name;
        self.category = draft.category;
        self.unit_price = draft.unit_price;
        self.expiration_date = draft.expiration_date;
        self.quantity_in_stock = draft.quantity_in_stock;
        self.updated_at = today;
    }

    pub fn set_quantity(&mut self, quantity: u32, today: NaiveDate) {
        self.quantity_in_stock = quantity;
        self.updated_at = today;
    }

    pub fn mark_out_of_stock(&mut self, today: NaiveDate) {
        self.set_quantity(OUT_OF_STOCK_QUANTITY, today);
    }

    pub fn mark_in_stock(&mut self, today: NaiveDate) {
        self.set_quantity(RESTOCK_QUANTITY, today);
    }

    /// Derived on demand, never stored.
    pub fn stock_value(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity_in_stock)
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity_in_stock > 0
    }
}
