// client/src/http.rs

use catalog_core::{Envelope, Product, ProductCandidate, ProductId, ProductPatch};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::ClientError;

/// Thin wrapper over the four catalog endpoints.
///
/// Every call resolves to the server's envelope whatever the HTTP status, so
/// callers branch on `success` instead of status codes. Only transport failures
/// and bodies that are not envelopes become `ClientError`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
  http: Client,
  base_url: String,
}

impl CatalogClient {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self::with_client(Client::new(), base_url)
  }

  pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { http, base_url }
  }

  #[instrument(name = "client::list", skip(self))]
  pub async fn list(&self) -> Result<Envelope<Vec<Product>>, ClientError> {
    self.send(self.http.get(format!("{}/api/products", self.base_url))).await
  }

  #[instrument(name = "client::create", skip(self, candidate))]
  pub async fn create(&self, candidate: &ProductCandidate) -> Result<Envelope<Product>, ClientError> {
    self
      .send(self.http.post(format!("{}/api/products", self.base_url)).json(candidate))
      .await
  }

  #[instrument(name = "client::update", skip(self, patch), fields(product_id = %id))]
  pub async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Envelope<Product>, ClientError> {
    self
      .send(self.http.put(format!("{}/api/product/{}", self.base_url, id)).json(patch))
      .await
  }

  #[instrument(name = "client::delete", skip(self), fields(product_id = %id))]
  pub async fn delete(&self, id: ProductId) -> Result<Envelope<()>, ClientError> {
    self
      .send(self.http.delete(format!("{}/api/product/{}", self.base_url, id)))
      .await
  }

  async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Envelope<T>, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;
    debug!(status = status.as_u16(), bytes = body.len(), "Received catalog response");

    serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
      status: status.as_u16(),
      message: e.to_string(),
    })
  }
}
