// server/src/state.rs
use catalog_core::ProductRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: Arc<dyn ProductRepository>,
}

impl AppState {
  pub fn new(products: Arc<dyn ProductRepository>) -> Self {
    Self { products }
  }
}
