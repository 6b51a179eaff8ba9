// core/src/repository/mod.rs

//! The persistence contract the request handlers are written against.

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::{NewProduct, Product, ProductId, ProductPatch};

/// A document store holding product records keyed by `ProductId`.
///
/// Implementations are expected to make single-document reads and writes
/// atomic. Nothing stronger is assumed: a record may disappear between a
/// `find_by_id` and a following `update`/`delete`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// All records, oldest first.
  async fn find_all(&self) -> StoreResult<Vec<Product>>;

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;

  /// Persists a new record. The store assigns the id and timestamps.
  async fn insert(&self, product: NewProduct) -> StoreResult<Product>;

  /// Merges `patch` onto the stored record and returns the result,
  /// or `None` when nothing is stored under `id`.
  async fn update(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Option<Product>>;

  /// Returns whether a record was removed.
  async fn delete(&self, id: ProductId) -> StoreResult<bool>;

  async fn count(&self) -> StoreResult<u64>;
}
