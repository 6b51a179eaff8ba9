// client/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("Request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Unexpected response (HTTP {status}): {message}")]
  Decode { status: u16, message: String },
}
