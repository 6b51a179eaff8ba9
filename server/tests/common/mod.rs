// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use actix_web::{web, App};
use async_trait::async_trait;
use catalog_core::{
  MemoryProductRepository, NewProduct, Product, ProductId, ProductPatch, ProductRepository, StoreError, StoreResult,
};
use catalog_server::web::configure_app_routes;
use catalog_server::AppState;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Repository double that counts calls and can be told to fail ---
#[derive(Default)]
pub struct RecordingRepository {
  pub inner: MemoryProductRepository,
  pub fail_with: Option<StoreError>,
  pub find_all_calls: AtomicUsize,
  pub find_by_id_calls: AtomicUsize,
  pub insert_calls: AtomicUsize,
  pub update_calls: AtomicUsize,
  pub delete_calls: AtomicUsize,
}

impl RecordingRepository {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn failing(message: &str) -> Arc<Self> {
    Arc::new(Self {
      fail_with: Some(StoreError::Backend(message.to_string())),
      ..Default::default()
    })
  }

  pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
  }

  pub fn persistence_reads(&self) -> usize {
    Self::calls(&self.find_all_calls) + Self::calls(&self.find_by_id_calls)
  }

  fn check(&self, counter: &AtomicUsize) -> StoreResult<()> {
    counter.fetch_add(1, Ordering::SeqCst);
    match &self.fail_with {
      Some(e) => Err(e.clone()),
      None => Ok(()),
    }
  }
}

#[async_trait]
impl ProductRepository for RecordingRepository {
  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    self.check(&self.find_all_calls)?;
    self.inner.find_all().await
  }

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
    self.check(&self.find_by_id_calls)?;
    self.inner.find_by_id(id).await
  }

  async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
    self.check(&self.insert_calls)?;
    self.inner.insert(product).await
  }

  async fn update(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Option<Product>> {
    self.check(&self.update_calls)?;
    self.inner.update(id, patch).await
  }

  async fn delete(&self, id: ProductId) -> StoreResult<bool> {
    self.check(&self.delete_calls)?;
    self.inner.delete(id).await
  }

  async fn count(&self) -> StoreResult<u64> {
    self.inner.count().await
  }
}

pub fn new_product(name: &str, price: f64) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    price,
    image: format!("{}.jpg", name.to_lowercase()),
  }
}

/// Mounts the real route table over `repo`.
pub fn test_app(
  repo: Arc<dyn ProductRepository>,
) -> App<
  impl actix_web::dev::ServiceFactory<
    actix_web::dev::ServiceRequest,
    Config = (),
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(web::Data::new(AppState::new(repo)))
    .configure(configure_app_routes)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
