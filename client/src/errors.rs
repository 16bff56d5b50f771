// client/src/errors.rs

use rasoi::RasoiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("HTTP transport error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("Backend returned {status}: {message}")]
  Backend { status: u16, message: String },

  #[error("Response decode error: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("Checkout error: {source}")]
  Checkout {
    #[from] // Allows conversion from rasoi::RasoiError
    source: RasoiError,
  },

  #[error("Internal client error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into ClientError for convenience in
// callers that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for ClientError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<ClientError>() {
      Ok(client_err) => client_err,
      Err(err) => ClientError::Internal(err.to_string()),
    }
  }
}

// Define a Result type alias for the crate
pub type Result<T, E = ClientError> = std::result::Result<T, E>;
