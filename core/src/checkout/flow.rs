// core/src/checkout/flow.rs

//! Contains `CheckoutFlow::submit()`, the state machine sequencing
//! authentication, address selection, and order submission.

use crate::cart::Cart;
use crate::checkout::gateway::{OrderDraft, OrderGateway};
use crate::checkout::state::{CheckoutState, SubmitOutcome};
use crate::error::RasoiError;
use crate::pricing::PricingPolicy;
use crate::shared::Shared;
use tracing::{event, instrument, Level};
use uuid::Uuid;

/// The checkout flow for one session.
///
/// Holds a handle to the shared cart, the pricing policy, and the order
/// gateway. `submit` drives `Idle → AwaitingAddress → Submitting →
/// Succeeded`; a failed submission surfaces its error, records the message,
/// and returns the flow to `Idle` with the cart intact so the user can
/// re-invoke checkout. There is no retry policy beyond that.
pub struct CheckoutFlow<G: OrderGateway> {
  cart: Shared<Cart>,
  policy: PricingPolicy,
  gateway: G,
  user_id: Option<Uuid>,
  address_id: Option<Uuid>,
  state: CheckoutState,
  last_error: Option<String>,
}

impl<G: OrderGateway> CheckoutFlow<G> {
  pub fn new(cart: Shared<Cart>, policy: PricingPolicy, gateway: G) -> Self {
    Self {
      cart,
      policy,
      gateway,
      user_id: None,
      address_id: None,
      state: CheckoutState::Idle,
      last_error: None,
    }
  }

  /// Marks the session as authenticated.
  pub fn authenticate(&mut self, user_id: Uuid) {
    self.user_id = Some(user_id);
  }

  /// Selects the delivery address. Un-parks a flow waiting on one.
  pub fn select_address(&mut self, address_id: Uuid) {
    self.address_id = Some(address_id);
    if self.state == CheckoutState::AwaitingAddress {
      self.state = CheckoutState::Idle;
    }
  }

  pub fn state(&self) -> CheckoutState {
    self.state
  }

  pub fn selected_address(&self) -> Option<Uuid> {
    self.address_id
  }

  /// Message from the most recent failed submission, if any.
  pub fn last_error(&self) -> Option<&str> {
    self.last_error.as_deref()
  }

  /// Returns a completed flow to `Idle` for a fresh cart.
  pub fn reset(&mut self) {
    self.state = CheckoutState::Idle;
    self.last_error = None;
  }

  /// Sequences the checkout: ensure something to submit, an authenticated
  /// user, and a selected address, then hand the cart snapshot to the
  /// gateway. On success the cart is cleared; on failure the flow returns
  /// to `Idle` and the cart is left intact.
  #[instrument(
        name = "CheckoutFlow::submit",
        skip_all,
        fields(state = ?self.state),
        err(Display)
    )]
  pub async fn submit(&mut self) -> Result<SubmitOutcome, RasoiError> {
    match self.state {
      CheckoutState::Submitting => return Err(RasoiError::SubmissionInFlight),
      CheckoutState::Succeeded { order_id } => {
        return Err(RasoiError::AlreadyCompleted { order_id })
      }
      CheckoutState::Idle | CheckoutState::AwaitingAddress => {}
    }

    if self.cart.read().is_empty() {
      return Err(RasoiError::EmptyCart);
    }

    let user_id = match self.user_id {
      Some(id) => id,
      None => {
        event!(Level::WARN, "Submit refused: session is not authenticated.");
        return Err(RasoiError::AuthRequired);
      }
    };

    let address_id = match self.address_id {
      Some(id) => id,
      None => {
        event!(Level::INFO, "No delivery address selected; awaiting address.");
        self.state = CheckoutState::AwaitingAddress;
        return Ok(SubmitOutcome::AddressRequired);
      }
    };

    self.state = CheckoutState::Submitting;

    // Snapshot the cart and totals up front; the guard must be dropped
    // before the await below.
    let draft = {
      let cart = self.cart.read();
      let summary = self.policy.summarize(&cart);
      OrderDraft::from_cart(&cart, user_id, address_id, summary)
    };

    event!(
      Level::INFO,
      lines = draft.lines.len(),
      total_cents = draft.summary.total_cents,
      address_id = %address_id,
      "Submitting order."
    );

    match self.gateway.submit_order(&draft).await {
      Ok(receipt) => {
        self.cart.write().clear();
        self.state = CheckoutState::Succeeded {
          order_id: receipt.order_id,
        };
        self.last_error = None;
        event!(Level::INFO, order_id = %receipt.order_id, "Order placed; cart cleared.");
        Ok(SubmitOutcome::Placed(receipt))
      }
      Err(source) => {
        self.state = CheckoutState::Idle;
        self.last_error = Some(source.to_string());
        event!(Level::WARN, error = %source, "Order submission failed; cart left intact.");
        Err(RasoiError::Gateway { source })
      }
    }
  }
}
