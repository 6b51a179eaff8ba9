// core/src/repository/memory.rs
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use super::ProductRepository;
use crate::error::StoreResult;
use crate::model::{NewProduct, Product, ProductId, ProductPatch};

/// Process-local store kept in insertion order.
///
/// Guards are never held across an `.await`, so the blocking
/// `parking_lot` lock is fine inside async methods.
#[derive(Debug, Clone, Default)]
pub struct MemoryProductRepository {
  products: Arc<RwLock<Vec<Product>>>,
}

impl MemoryProductRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn snapshot(&self) -> Vec<Product> {
    self.products.read().clone()
  }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    Ok(self.snapshot())
  }

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
    Ok(self.products.read().iter().find(|p| p.id == id).cloned())
  }

  async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
    let created = product.into_product(ProductId::generate(), Utc::now());
    self.products.write().push(created.clone());
    debug!(product_id = %created.id, "Inserted product into memory store.");
    Ok(created)
  }

  async fn update(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Option<Product>> {
    let mut guard = self.products.write();
    Ok(guard.iter_mut().find(|p| p.id == id).map(|existing| {
      existing.apply(patch);
      existing.updated_at = Utc::now();
      existing.clone()
    }))
  }

  async fn delete(&self, id: ProductId) -> StoreResult<bool> {
    let mut guard = self.products.write();
    let before = guard.len();
    guard.retain(|p| p.id != id);
    Ok(guard.len() != before)
  }

  async fn count(&self) -> StoreResult<u64> {
    Ok(self.products.read().len() as u64)
  }
}
