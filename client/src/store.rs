// client/src/store.rs

use catalog_core::{Product, ProductCandidate, ProductId, ProductPatch};
use tracing::{info, warn};

use crate::http::CatalogClient;

/// Outcome handed back to the view, e.g. to pick a notification style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpResult {
  pub success: bool,
  pub message: String,
}

impl OpResult {
  fn ok(message: impl Into<String>) -> Self {
    Self {
      success: true,
      message: message.into(),
    }
  }

  fn fail(message: impl Into<String>) -> Self {
    Self {
      success: false,
      message: message.into(),
    }
  }
}

/// Last known server state of the product list.
///
/// Operations take `&mut self`, so whoever owns the store decides how calls
/// are sequenced. Local state only changes after the server has answered.
/// Creates and updates apply only successful answers; deletes apply any answer.
#[derive(Debug, Clone)]
pub struct ProductStore {
  client: CatalogClient,
  products: Vec<Product>,
}

impl ProductStore {
  pub fn new(client: CatalogClient) -> Self {
    Self {
      client,
      products: Vec::new(),
    }
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn set_products(&mut self, products: Vec<Product>) {
    self.products = products;
  }

  /// Replaces local state with the server's list.
  pub async fn fetch_products(&mut self) -> OpResult {
    match self.client.list().await {
      Ok(envelope) if envelope.success => {
        self.products = envelope.data.unwrap_or_default();
        info!("Fetched {} products.", self.products.len());
        OpResult::ok(envelope.message)
      }
      Ok(envelope) => OpResult::fail(envelope.message),
      Err(e) => {
        warn!("Fetching products failed: {}", e);
        OpResult::fail(e.to_string())
      }
    }
  }

  pub async fn create_product(&mut self, candidate: ProductCandidate) -> OpResult {
    if let Err(e) = candidate.clone().validate_strict() {
      return OpResult::fail(e.to_string());
    }

    match self.client.create(&candidate).await {
      Ok(envelope) if envelope.success => {
        if let Some(created) = envelope.data {
          self.products.push(created);
        }
        OpResult::ok(envelope.message)
      }
      Ok(envelope) => OpResult::fail(envelope.message),
      Err(e) => {
        warn!("Creating product failed: {}", e);
        OpResult::fail(e.to_string())
      }
    }
  }

  pub async fn delete_product(&mut self, id: ProductId) -> OpResult {
    match self.client.delete(id).await {
      // Any answer from the server drops the local copy, including "not found".
      Ok(envelope) => {
        self.products.retain(|p| p.id != id);
        OpResult {
          success: envelope.success,
          message: envelope.message,
        }
      }
      Err(e) => {
        warn!("Deleting product {} failed: {}", id, e);
        OpResult::fail(e.to_string())
      }
    }
  }

  pub async fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> OpResult {
    match self.client.update(id, &patch).await {
      Ok(envelope) if envelope.success => {
        if let Some(updated) = envelope.data {
          if let Some(slot) = self.products.iter_mut().find(|p| p.id == id) {
            *slot = updated;
          }
        }
        OpResult::ok(envelope.message)
      }
      Ok(envelope) => OpResult::fail(envelope.message),
      Err(e) => {
        warn!("Updating product {} failed: {}", id, e);
        OpResult::fail(e.to_string())
      }
    }
  }
}
