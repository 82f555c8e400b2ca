//! Product domain module.
//!
//! This crate contains the product record and its business rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Mutation dates are passed in explicitly so nothing here reads
//! the clock.

pub mod availability;
pub mod field;
pub mod product;

pub use availability::Availability;
pub use field::{ProductField, SortValue};
pub use product::{
    NAME_MAX_LEN, OUT_OF_STOCK_QUANTITY, Product, ProductDraft, RESTOCK_QUANTITY,
};
