// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RasoiError {
  #[error("Cart is empty; nothing to submit")]
  EmptyCart,

  #[error("Checkout requires an authenticated user")]
  AuthRequired,

  #[error("An order submission is already in flight")]
  SubmissionInFlight,

  #[error("Checkout already completed for this session (order {order_id})")]
  AlreadyCompleted { order_id: Uuid },

  #[error("Order gateway failed. Source: {source}")]
  Gateway {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal rasoi error: {0}")]
  Internal(String),
}

// This is the conversion the flow relies on for external collaborator errors.
impl From<AnyhowError> for RasoiError {
  fn from(err: AnyhowError) -> Self {
    // An anyhow::Error already wrapping a RasoiError is re-wrapped rather
    // than unwrapped; the variant is not Clone and the gateway seam is the
    // only place this conversion runs.
    RasoiError::Gateway { source: err }
  }
}

pub type RasoiResult<T, E = RasoiError> = std::result::Result<T, E>;
