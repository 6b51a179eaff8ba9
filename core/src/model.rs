// core/src/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;

/// Opaque store-assigned key of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
  pub fn generate() -> Self {
    ProductId(Uuid::new_v4())
  }

  /// Format check only. Says nothing about whether a record exists.
  ///
  /// Only the lowercase hyphenated form is accepted, so each record has exactly
  /// one address and responses echo the id the caller sent.
  pub fn parse(raw: &str) -> Result<Self, ValidationError> {
    match Uuid::parse_str(raw) {
      Ok(id) if id.hyphenated().to_string() == raw => Ok(ProductId(id)),
      _ => Err(ValidationError::InvalidIdentifier(raw.to_string())),
    }
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for ProductId {
  fn from(id: Uuid) -> Self {
    ProductId(id)
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  #[serde(rename = "_id")]
  pub id: ProductId,
  pub name: String,
  pub price: f64,
  pub image: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Product {
  /// Overwrites the fields present in `patch`, leaving the rest untouched.
  pub fn apply(&mut self, patch: ProductPatch) {
    if let Some(name) = patch.name {
      self.name = name;
    }
    if let Some(price) = patch.price {
      self.price = price;
    }
    if let Some(image) = patch.image {
      self.image = image;
    }
  }
}

/// Body of a create request. Every field is optional here so that a missing
/// field is reported as a validation failure, not a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCandidate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
}

impl ProductCandidate {
  pub fn new(name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      price: Some(price),
      image: Some(image.into()),
    }
  }
}

/// Body of an update request. Present fields overwrite, absent ones are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
}

/// A candidate that passed validation and can be handed to a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub price: f64,
  pub image: String,
}

impl NewProduct {
  pub fn into_product(self, id: ProductId, now: DateTime<Utc>) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
      image: self.image,
      created_at: now,
      updated_at: now,
    }
  }
}
