// src/lib.rs

//! Catalog core: the domain half of the product catalog service.
//!
//! This crate holds everything the HTTP server and the client share:
//!  - The `Product` record and its identifier guard.
//!  - Create and patch payload schemas with their validation rules.
//!  - The `{success, message, data}` response envelope.
//!  - The `ProductRepository` persistence contract plus an in-memory implementation.

pub mod envelope;
pub mod error;
pub mod model;
pub mod repository;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::envelope::Envelope;
pub use crate::error::{StoreError, StoreResult, ValidationError};
pub use crate::model::{NewProduct, Product, ProductCandidate, ProductId, ProductPatch};
pub use crate::repository::{memory::MemoryProductRepository, ProductRepository};
