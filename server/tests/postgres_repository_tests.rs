// tests/postgres_repository_tests.rs
//
// Needs a reachable Postgres: DATABASE_URL=postgres://... cargo test -- --ignored
mod common;

use catalog_core::{ProductId, ProductPatch, ProductRepository};
use catalog_server::db::PgProductRepository;
use common::*;

async fn connect() -> PgProductRepository {
  setup_tracing();
  let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
  let repo = PgProductRepository::connect(&url).await.expect("connect to test database");
  repo.ensure_schema().await.expect("create products table");
  repo
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_then_find_round_trips() {
  let repo = connect().await;
  let created = repo.insert(new_product("PgRoundTrip", 9.99)).await.unwrap();

  let found = repo.find_by_id(created.id).await.unwrap().expect("row exists");
  assert_eq!(found.name, "PgRoundTrip");
  assert_eq!(found.price, 9.99);
  assert_eq!(found.image, "pgroundtrip.jpg");
  assert_eq!(found.created_at, found.updated_at);

  let all = repo.find_all().await.unwrap();
  assert!(all.iter().any(|p| p.id == created.id));
  assert!(repo.count().await.unwrap() >= 1);

  repo.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn update_merges_only_supplied_columns() {
  let repo = connect().await;
  let created = repo.insert(new_product("PgMerge", 10.0)).await.unwrap();

  let updated = repo
    .update(
      created.id,
      ProductPatch {
        price: Some(42.0),
        ..Default::default()
      },
    )
    .await
    .unwrap()
    .expect("row exists");
  assert_eq!(updated.id, created.id);
  assert_eq!(updated.name, "PgMerge");
  assert_eq!(updated.price, 42.0);
  assert_eq!(updated.image, "pgmerge.jpg");
  assert!(updated.updated_at >= created.updated_at);

  let unchanged = repo
    .update(created.id, ProductPatch::default())
    .await
    .unwrap()
    .expect("row exists");
  assert_eq!(unchanged.name, "PgMerge");
  assert_eq!(unchanged.price, 42.0);

  repo.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn missing_rows_are_reported() {
  let repo = connect().await;
  let id = ProductId::generate();
  assert_eq!(repo.find_by_id(id).await.unwrap(), None);
  assert_eq!(repo.update(id, ProductPatch::default()).await.unwrap(), None);
  assert!(!repo.delete(id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn delete_removes_the_row() {
  let repo = connect().await;
  let created = repo.insert(new_product("PgDelete", 1.0)).await.unwrap();
  assert!(repo.delete(created.id).await.unwrap());
  assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
}
