// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog_core::{Envelope, ProductCandidate, ProductId, ProductPatch};
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  info!("Attempting to list products.");

  let products = app_state.products.find_all().await.map_err(|e| {
    error!("Failed to fetch products from store: {}", e);
    AppError::Listing(e.to_string())
  })?;

  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(Envelope::ok("All products obtained", products)))
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductCandidate>,
) -> Result<HttpResponse, AppError> {
  let new_product = payload.into_inner().validate().map_err(|e| {
    warn!("Rejected product candidate: {:?}", e);
    AppError::from(e)
  })?;

  let created = app_state.products.insert(new_product).await.map_err(|e| {
    error!("Error creating product: {}", e);
    AppError::Store(e)
  })?;

  info!(product_id = %created.id, "Product created.");

  Ok(HttpResponse::Created().json(Envelope::ok("Product added successfully", created)))
}

/// An empty body is a no-op patch; anything else must be a JSON object of product fields.
fn parse_patch(body: &[u8]) -> Result<ProductPatch, AppError> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(ProductPatch::default());
  }
  serde_json::from_slice(body).map_err(|e| AppError::Validation(format!("Invalid product payload: {}", e)))
}

// The body is read raw so the identifier guard runs before any payload parsing.
#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId::parse(&path.into_inner())?;
  let patch = parse_patch(&body)?;

  let existing = app_state.products.find_by_id(product_id).await.map_err(|e| {
    error!("Update /api/product/{} lookup error: {}", product_id, e);
    AppError::Store(e)
  })?;
  if existing.is_none() {
    warn!("Product with ID {} not found.", product_id);
    return Err(AppError::NotFound(product_id.to_string()));
  }

  // The record can vanish between the lookup and the write; that also reads as not found.
  let updated = app_state
    .products
    .update(product_id, patch)
    .await
    .map_err(|e| {
      error!("Update /api/product/{} error: {}", product_id, e);
      AppError::Store(e)
    })?
    .ok_or_else(|| AppError::NotFound(product_id.to_string()))?;

  info!("Product {} updated successfully.", product_id);

  Ok(HttpResponse::Ok().json(Envelope::ok("Product updated successfully", updated)))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId::parse(&path.into_inner())?;

  let existing = app_state.products.find_by_id(product_id).await.map_err(|e| {
    error!("Delete /api/product/{} lookup error: {}", product_id, e);
    AppError::Store(e)
  })?;
  if existing.is_none() {
    warn!("Product with ID {} not found.", product_id);
    return Err(AppError::NotFound(product_id.to_string()));
  }

  let removed = app_state.products.delete(product_id).await.map_err(|e| {
    error!("Delete /api/product/{} error: {}", product_id, e);
    AppError::Store(e)
  })?;
  if !removed {
    warn!("Product {} disappeared before delete.", product_id);
    return Err(AppError::NotFound(product_id.to_string()));
  }

  info!("Product {} deleted.", product_id);

  Ok(HttpResponse::Ok().json(Envelope::done("Product deleted successfully")))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_body_is_an_empty_patch() {
    assert_eq!(parse_patch(b"").unwrap(), ProductPatch::default());
    assert_eq!(parse_patch(b" \n").unwrap(), ProductPatch::default());
  }

  #[test]
  fn partial_body_parses_into_patch() {
    let patch = parse_patch(br#"{"price": 12.5}"#).unwrap();
    assert_eq!(patch.price, Some(12.5));
    assert!(patch.name.is_none());
  }

  #[test]
  fn malformed_body_is_a_validation_error() {
    assert!(matches!(parse_patch(b"{\"name\": "), Err(AppError::Validation(_))));
    assert!(matches!(parse_patch(br#"{"price": "cheap"}"#), Err(AppError::Validation(_))));
  }
}
