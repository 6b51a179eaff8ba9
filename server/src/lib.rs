// server/src/lib.rs

//! HTTP front of the product catalog: configuration, error mapping, the four
//! product handlers, the route table and the Postgres-backed store.

pub mod config;
pub mod db;
pub mod errors;
pub mod startup;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
