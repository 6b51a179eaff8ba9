// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SEED_FILE: &str = "seed/products.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // Bulk-load products on startup when the collection is empty
  pub seed_db: bool,
  pub seed_file: PathBuf,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_vars(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_vars<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env =
      |var_name: &str| lookup(var_name).ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)));

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = match lookup("PORT") {
      Some(raw) => raw
        .trim()
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?,
      None => DEFAULT_PORT,
    };

    let database_url = get_env("DATABASE_URL")?;
    if !(database_url.starts_with("postgres://") || database_url.starts_with("postgresql://")) {
      return Err(AppError::Config(
        "DATABASE_URL must be a postgres:// or postgresql:// connection string".to_string(),
      ));
    }

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;
    let seed_file = PathBuf::from(get_env("SEED_FILE").unwrap_or_else(|_| DEFAULT_SEED_FILE.to_string()));

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      seed_db,
      seed_file,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
