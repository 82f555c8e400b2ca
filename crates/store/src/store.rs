use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_catalog::Product;
use stockroom_core::{InventoryError, InventoryResult, ProductId};

/// The id -> record map behind a single read/write lock.
///
/// Reads hand out clones; callers never hold references into the map.
/// The store itself never sorts, filters or checks existence for mutations
/// beyond what the operation needs; that is the service layer's job.
#[derive(Debug, Default)]
pub struct ProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_map(&self) -> InventoryResult<RwLockReadGuard<'_, HashMap<ProductId, Product>>> {
        self.inner
            .read()
            .map_err(|_| InventoryError::store("lock poisoned"))
    }

    fn write_map(&self) -> InventoryResult<RwLockWriteGuard<'_, HashMap<ProductId, Product>>> {
        self.inner
            .write()
            .map_err(|_| InventoryError::store("lock poisoned"))
    }

    /// Insert-or-replace by id; returns the stored record.
    pub fn put(&self, product: Product) -> InventoryResult<Product> {
        let mut map = self.write_map()?;
        map.insert(product.id, product.clone());
        Ok(product)
    }

    /// Bulk insert-or-replace under one lock acquisition.
    pub fn put_many(&self, products: Vec<Product>) -> InventoryResult<Vec<Product>> {
        let mut map = self.write_map()?;
        for product in &products {
            map.insert(product.id, product.clone());
        }
        Ok(products)
    }

    pub fn get(&self, id: &ProductId) -> InventoryResult<Option<Product>> {
        let map = self.read_map()?;
        Ok(map.get(id).cloned())
    }

    pub fn contains(&self, id: &ProductId) -> InventoryResult<bool> {
        let map = self.read_map()?;
        Ok(map.contains_key(id))
    }

    /// Remove by id; absent ids are a no-op at this layer.
    pub fn remove(&self, id: &ProductId) -> InventoryResult<()> {
        let mut map = self.write_map()?;
        map.remove(id);
        Ok(())
    }

    /// Snapshot of all records, in unspecified (insertion-independent) order.
    pub fn list(&self) -> InventoryResult<Vec<Product>> {
        let map = self.read_map()?;
        Ok(map.values().cloned().collect())
    }

    pub fn len(&self) -> InventoryResult<usize> {
        let map = self.read_map()?;
        Ok(map.len())
    }

    pub fn is_empty(&self) -> InventoryResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> InventoryResult<()> {
        let mut map = self.write_map()?;
        map.clear();
        Ok(())
    }
}
