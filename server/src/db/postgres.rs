// server/src/db/postgres.rs

use async_trait::async_trait;
use catalog_core::{NewProduct, Product, ProductId, ProductPatch, ProductRepository, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::{error, info, instrument};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "id, name, price, image, created_at, updated_at";

#[derive(Debug, FromRow)]
struct ProductRow {
  id: Uuid,
  name: String,
  price: f64,
  image: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: ProductId::from(row.id),
      name: row.name,
      price: row.price,
      image: row.image,
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

fn store_error(e: sqlx::Error) -> StoreError {
  match e {
    sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => StoreError::Unavailable(e.to_string()),
    other => StoreError::Backend(other.to_string()),
  }
}

/// Product collection kept in a single Postgres table.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
    let pool = PgPoolOptions::new().max_connections(5).connect(database_url).await?;
    Ok(Self { pool })
  }

  pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
    sqlx::query(
      "CREATE TABLE IF NOT EXISTS products (
         id UUID PRIMARY KEY,
         name TEXT NOT NULL,
         price DOUBLE PRECISION NOT NULL,
         image TEXT NOT NULL,
         created_at TIMESTAMPTZ NOT NULL,
         updated_at TIMESTAMPTZ NOT NULL
       )",
    )
    .execute(&self.pool)
    .await?;
    info!("Products table is in place.");
    Ok(())
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  #[instrument(name = "pg::find_all", skip(self), err)]
  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!(
      "SELECT {SELECT_COLUMNS} FROM products ORDER BY created_at ASC, id ASC"
    ))
    .fetch_all(&self.pool)
    .await
    .map_err(store_error)?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "pg::find_by_id", skip(self), fields(product_id = %id), err)]
  async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM products WHERE id = $1"))
      .bind(id.as_uuid())
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(row.map(Product::from))
  }

  #[instrument(name = "pg::insert", skip(self, product), err)]
  async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
    let row: ProductRow = sqlx::query_as(&format!(
      "INSERT INTO products (id, name, price, image, created_at, updated_at)
       VALUES ($1, $2, $3, $4, $5, $5)
       RETURNING {SELECT_COLUMNS}"
    ))
    .bind(ProductId::generate().as_uuid())
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.image)
    .bind(Utc::now())
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      error!("Failed to insert product '{}': {}", product.name, e);
      store_error(e)
    })?;
    Ok(row.into())
  }

  #[instrument(name = "pg::update", skip(self, patch), fields(product_id = %id), err)]
  async fn update(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!(
      "UPDATE products
       SET name = COALESCE($2, name),
           price = COALESCE($3, price),
           image = COALESCE($4, image),
           updated_at = $5
       WHERE id = $1
       RETURNING {SELECT_COLUMNS}"
    ))
    .bind(id.as_uuid())
    .bind(patch.name)
    .bind(patch.price)
    .bind(patch.image)
    .bind(Utc::now())
    .fetch_optional(&self.pool)
    .await
    .map_err(store_error)?;
    Ok(row.map(Product::from))
  }

  #[instrument(name = "pg::delete", skip(self), fields(product_id = %id), err)]
  async fn delete(&self, id: ProductId) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id.as_uuid())
      .execute(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(result.rows_affected() > 0)
  }

  async fn count(&self) -> StoreResult<u64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
      .fetch_one(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(total.max(0) as u64)
  }
}
