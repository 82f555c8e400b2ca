use std::collections::BTreeSet;

use chrono::NaiveDate;

use stockroom_catalog::{Product, ProductDraft};
use stockroom_core::{InventoryError, InventoryResult, Page, PageRequest, ProductId};

use crate::metrics::{InventoryMetric, inventory_metrics};
use crate::query::{ProductFilter, run_query};
use crate::sort::SortKey;
use crate::store::ProductStore;

/// Facade over the record store: every externally-reachable operation goes
/// through here.
///
/// Mutations check existence first and then write; the two steps are
/// separate lock acquisitions, so racing delete/update of one id resolves
/// as last-writer-wins. Mutation dates come in as `today` so this layer
/// never reads the clock.
#[derive(Debug, Default)]
pub struct InventoryService {
    store: ProductStore,
}

impl InventoryService {
    pub fn new() -> Self {
        Self {
            store: ProductStore::new(),
        }
    }

    pub fn with_store(store: ProductStore) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &ProductStore {
        &self.store
    }

    /// Create a record from a validated draft; id and both dates assigned
    /// here.
    pub fn create(&self, draft: ProductDraft, today: NaiveDate) -> InventoryResult<Product> {
        let product = Product::create(ProductId::new(), draft, today);
        tracing::debug!(id = %product.id, name = %product.name, "product created");
        self.store.put(product)
    }

    pub fn get(&self, id: &ProductId) -> InventoryResult<Product> {
        self.store.get(id)?.ok_or(InventoryError::NotFound)
    }

    /// Replace every caller-settable field of an existing record.
    /// `created_at` survives; `updated_at` moves to `today`.
    pub fn update(
        &self,
        id: &ProductId,
        draft: ProductDraft,
        today: NaiveDate,
    ) -> InventoryResult<Product> {
        let mut product = self.get(id)?;
        product.apply_draft(draft, today);
        self.store.put(product)
    }

    pub fn delete(&self, id: &ProductId) -> InventoryResult<()> {
        if !self.store.contains(id)? {
            return Err(InventoryError::NotFound);
        }
        tracing::debug!(%id, "product deleted");
        self.store.remove(id)
    }

    pub fn mark_out_of_stock(&self, id: &ProductId, today: NaiveDate) -> InventoryResult<Product> {
        let mut product = self.get(id)?;
        product.mark_out_of_stock(today);
        self.store.put(product)
    }

    pub fn mark_in_stock(&self, id: &ProductId, today: NaiveDate) -> InventoryResult<Product> {
        let mut product = self.get(id)?;
        product.mark_in_stock(today);
        self.store.put(product)
    }

    pub fn list(&self, keys: &[SortKey], page: PageRequest) -> InventoryResult<Page<Product>> {
        run_query(&self.store, &ProductFilter::default(), keys, page)
    }

    pub fn search(
        &self,
        filter: &ProductFilter,
        keys: &[SortKey],
        page: PageRequest,
    ) -> InventoryResult<Page<Product>> {
        run_query(&self.store, filter, keys, page)
    }

    /// Distinct category strings, sorted for a deterministic presentation.
    pub fn categories(&self) -> InventoryResult<Vec<String>> {
        let set: BTreeSet<String> = self
            .store
            .list()?
            .into_iter()
            .map(|p| p.category)
            .collect();
        Ok(set.into_iter().collect())
    }

    /// Per-category metrics plus the Overall entry, over the full record
    /// set (no filtering, no pagination).
    pub fn metrics(&self) -> InventoryResult<Vec<InventoryMetric>> {
        let products = self.store.list()?;
        Ok(inventory_metrics(&products))
    }

    pub fn len(&self) -> InventoryResult<usize> {
        self.store.len()
    }

    pub fn is_empty(&self) -> InventoryResult<bool> {
        self.store.is_empty()
    }
}
