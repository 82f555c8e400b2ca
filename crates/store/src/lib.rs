//! Data-access layer: in-memory store, query pipeline, seed data.
//!
//! Owns the record store and everything that runs against it: the composite
//! sort comparator, the filter pipeline, pagination of query results, and
//! the category/overall metrics aggregation. All operations are synchronous
//! and bounded by store size; one read/write lock serializes access to the
//! key space.

pub mod metrics;
pub mod query;
pub mod seed;
pub mod service;
pub mod sort;
pub mod store;

pub use metrics::{InventoryMetric, OVERALL_LABEL, inventory_metrics};
pub use query::ProductFilter;
pub use seed::seed_products;
pub use service::InventoryService;
pub use sort::{SortDirection, SortKey, sort_products};
pub use store::ProductStore;
