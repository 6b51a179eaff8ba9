// core/src/validation.rs

//! Presence and shape checks applied to a `ProductCandidate` before it is persisted.
//!
//! Two rule sets exist. The server accepts any "truthy" price (present, non-zero,
//! not NaN), while clients additionally insist on a strictly positive, finite price.

use crate::error::ValidationError;
use crate::model::{NewProduct, ProductCandidate};

fn non_empty(field: &Option<String>) -> bool {
  field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn truthy_price(price: Option<f64>) -> bool {
  price.is_some_and(|p| p != 0.0 && !p.is_nan())
}

fn positive_price(price: Option<f64>) -> bool {
  price.is_some_and(|p| p.is_finite() && p > 0.0)
}

impl ProductCandidate {
  /// Server-side rules.
  pub fn validate(self) -> Result<NewProduct, ValidationError> {
    let price_ok = truthy_price(self.price);
    self.finish(price_ok)
  }

  /// Client-side rules.
  pub fn validate_strict(self) -> Result<NewProduct, ValidationError> {
    let price_ok = positive_price(self.price);
    self.finish(price_ok)
  }

  fn finish(self, price_ok: bool) -> Result<NewProduct, ValidationError> {
    let mut missing = Vec::new();
    if !non_empty(&self.name) {
      missing.push("name");
    }
    if !price_ok {
      missing.push("price");
    }
    if !non_empty(&self.image) {
      missing.push("image");
    }

    match (self.name, self.price, self.image) {
      (Some(name), Some(price), Some(image)) if missing.is_empty() => Ok(NewProduct { name, price, image }),
      _ => Err(ValidationError::MissingFields { missing }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn complete_candidate_passes() {
    let new = ProductCandidate::new("Test", 9.99, "url.jpg").validate().unwrap();
    assert_eq!(new.name, "Test");
    assert_eq!(new.price, 9.99);
    assert_eq!(new.image, "url.jpg");
  }

  #[test]
  fn each_missing_field_is_reported() {
    let cases = [
      (ProductCandidate { name: None, ..ProductCandidate::new("x", 1.0, "i") }, "name"),
      (ProductCandidate { price: None, ..ProductCandidate::new("x", 1.0, "i") }, "price"),
      (ProductCandidate { image: None, ..ProductCandidate::new("x", 1.0, "i") }, "image"),
    ];
    for (candidate, field) in cases {
      match candidate.validate() {
        Err(ValidationError::MissingFields { missing }) => assert_eq!(missing, vec![field]),
        other => panic!("expected missing {field}, got {other:?}"),
      }
    }
  }

  #[test]
  fn falsy_values_count_as_missing() {
    let err = ProductCandidate::new("", 0.0, "  ").validate().unwrap_err();
    assert_eq!(
      err,
      ValidationError::MissingFields {
        missing: vec!["name", "price", "image"]
      }
    );
    assert_eq!(err.to_string(), "Please provide all fields");
  }

  #[test]
  fn server_accepts_negative_price_but_client_does_not() {
    assert!(ProductCandidate::new("x", -5.0, "i").validate().is_ok());
    assert!(ProductCandidate::new("x", -5.0, "i").validate_strict().is_err());
    assert!(ProductCandidate::new("x", f64::INFINITY, "i").validate_strict().is_err());
    assert!(ProductCandidate::new("x", 0.5, "i").validate_strict().is_ok());
  }

  #[test]
  fn nan_price_is_falsy() {
    assert!(ProductCandidate::new("x", f64::NAN, "i").validate().is_err());
  }
}
