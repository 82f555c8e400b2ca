//! `stockroom-core` — foundation building blocks for the record store.
//!
//! This crate contains **pure** primitives (no storage or transport
//! concerns): the error model, the typed product identifier, and the
//! pagination types shared by every layer above.

pub mod error;
pub mod id;
pub mod page;

pub use error::{InventoryError, InventoryResult};
pub use id::ProductId;
pub use page::{Page, PageRequest, paginate};
