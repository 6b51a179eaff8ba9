// core/src/error.rs
use thiserror::Error;

/// Failure reported by a persistence collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
  #[error("Store backend error: {0}")]
  Backend(String),

  #[error("Store unavailable: {0}")]
  Unavailable(String),
}

/// Rejection of caller-supplied input before it reaches the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
  #[error("Please provide all fields")]
  MissingFields { missing: Vec<&'static str> },

  #[error("Invalid product ID")]
  InvalidIdentifier(String),
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
