// server/src/main.rs

use catalog_core::ProductRepository;
use catalog_server::db::{seed, PgProductRepository};
use catalog_server::{startup, telemetry, AppConfig, AppState};
use std::net::TcpListener;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  telemetry::init_tracing();

  tracing::info!("Starting product catalog server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      std::process::exit(1);
    }
  };

  let repository = match PgProductRepository::connect(&app_config.database_url).await {
    Ok(repo) => {
      tracing::info!("Successfully connected to the database.");
      repo
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      std::process::exit(1);
    }
  };

  if let Err(e) = repository.ensure_schema().await {
    tracing::error!(error = %e, "Failed to prepare the products table.");
    std::process::exit(1);
  }

  let products: Arc<dyn ProductRepository> = Arc::new(repository);

  if app_config.seed_db {
    if let Err(e) = seed::seed_products(products.as_ref(), &app_config.seed_file).await {
      tracing::error!(error = %e, "Failed to seed database.");
    }
  }

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);
  let listener = TcpListener::bind(&server_address)?;

  startup::run(listener, AppState::new(products))?.await
}
