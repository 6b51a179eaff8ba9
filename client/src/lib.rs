// client/src/lib.rs

//! Typed client for the catalog HTTP API and the product store a view layer owns.
//!
//! `CatalogClient` speaks the wire protocol. `ProductStore` keeps the last known
//! product list and mirrors server responses into it after each round trip;
//! nothing is applied optimistically.

pub mod error;
pub mod http;
pub mod store;

pub use crate::error::ClientError;
pub use crate::http::CatalogClient;
pub use crate::store::{OpResult, ProductStore};
