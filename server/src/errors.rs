// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use catalog_core::{Envelope, StoreError, ValidationError};
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Invalid product ID";
pub const NOT_FOUND_MESSAGE: &str = "Product not found";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Invalid Identifier: {0}")]
  InvalidIdentifier(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  // The listing endpoint reports store failures as a client error carrying the raw message.
  #[error("Listing Failed: {0}")]
  Listing(String),

  #[error("Store Error: {0}")]
  Store(#[from] StoreError),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl From<ValidationError> for AppError {
  fn from(err: ValidationError) -> Self {
    match err {
      ValidationError::MissingFields { .. } => AppError::Validation(err.to_string()),
      ValidationError::InvalidIdentifier(raw) => AppError::InvalidIdentifier(raw),
    }
  }
}

impl AppError {
  /// Message placed in the response envelope. Server-side failures never echo their cause.
  fn public_message(&self) -> String {
    match self {
      AppError::Validation(m) => m.clone(),
      AppError::InvalidIdentifier(_) => INVALID_ID_MESSAGE.to_string(),
      AppError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
      AppError::Listing(m) => m.clone(),
      AppError::Store(_) | AppError::Config(_) => SERVER_ERROR_MESSAGE.to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::InvalidIdentifier(_) | AppError::Listing(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Store(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Log the full error when it's turned into a response
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with error");
    }
    HttpResponse::build(status).json(Envelope::<()>::fail(self.public_message()))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
