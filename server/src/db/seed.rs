// server/src/db/seed.rs

//! Startup bulk-load of products from a JSON file of `{name, price, image}` records.

use anyhow::Context;
use catalog_core::{NewProduct, ProductCandidate, ProductRepository};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Parses the seed file body and keeps only the records that pass validation.
pub fn parse_seed(raw: &str) -> anyhow::Result<Vec<NewProduct>> {
  let candidates: Vec<ProductCandidate> = serde_json::from_str(raw).context("Seed file is not a JSON array of products")?;

  let mut valid = Vec::with_capacity(candidates.len());
  for (index, candidate) in candidates.into_iter().enumerate() {
    match candidate.validate() {
      Ok(product) => valid.push(product),
      Err(e) => warn!("Skipping seed record #{}: {}", index, e),
    }
  }
  Ok(valid)
}

/// Loads `path` into `repo` when the collection is empty. Returns how many records were inserted.
#[instrument(name = "db::seed_products", skip(repo, path), fields(path = %path.display()))]
pub async fn seed_products(repo: &dyn ProductRepository, path: &Path) -> anyhow::Result<usize> {
  let existing = repo.count().await?;
  if existing > 0 {
    info!("Skipping seed, {} products already stored.", existing);
    return Ok(0);
  }

  let raw = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("Failed to read seed file {}", path.display()))?;
  let products = parse_seed(&raw)?;

  let mut inserted = 0;
  for product in products {
    repo.insert(product).await?;
    inserted += 1;
  }
  info!("Seeded {} products.", inserted);
  Ok(inserted)
}
