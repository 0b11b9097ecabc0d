//! # Record Store
//!
//! Owns the product records and hands out ids.
//!
//! ## Invariants
//! - Records keep insertion order. Pagination relies on it, so the store
//!   never sorts.
//! - `next_id = max(existing ids) + 1`, or 1 when empty. A live id is never
//!   handed out twice.
//! - `remove` is idempotent.

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductData, ProductId, ProductPatch};

/// In-memory product records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    products: Vec<Product>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> ProductId {
        self.products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }

    /// Stores a new record under the next id and returns it.
    pub fn add(&mut self, data: ProductData) -> Product {
        let product = data.into_product(self.next_id());
        info!(product_id = product.id, name = %product.name, "Product added");
        self.products.push(product.clone());
        product
    }

    /// Merges `patch` over the record with this id.
    ///
    /// ## Errors
    /// `CoreError::ProductNotFound` if no record has this id.
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> CoreResult<Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        patch.apply_to(product);
        info!(product_id = id, "Product updated");
        Ok(product.clone())
    }

    /// Removes the record if present. Returns whether anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);

        let removed = self.products.len() != before;
        if removed {
            info!(product_id = id, "Product removed");
        } else {
            debug!(product_id = id, "Remove ignored, no such product");
        }
        removed
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
