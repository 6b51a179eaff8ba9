// core/src/envelope.rs
use serde::{Deserialize, Serialize};

/// The `{success, message, data?}` wrapper every JSON response uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
  pub success: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
}

impl<T> Envelope<T> {
  pub fn ok(message: impl Into<String>, data: T) -> Self {
    Self {
      success: true,
      message: message.into(),
      data: Some(data),
    }
  }

  pub fn fail(message: impl Into<String>) -> Self {
    Self {
      success: false,
      message: message.into(),
      data: None,
    }
  }
}

impl Envelope<()> {
  /// Success without a payload; `data` is left out of the JSON entirely.
  pub fn done(message: impl Into<String>) -> Self {
    Self {
      success: true,
      message: message.into(),
      data: None,
    }
  }
}
