// core/src/checkout/state.rs

//! Signals describing where the checkout flow stands and what a submit
//! attempt produced.

use crate::checkout::gateway::OrderReceipt;
use uuid::Uuid;

/// Observable state of the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
  /// Nothing in flight; the cart can be edited and submitted.
  Idle,
  /// Submission was attempted without a delivery address; the flow is
  /// parked until one is selected.
  AwaitingAddress,
  /// The order request is in flight.
  Submitting,
  /// The order was placed and the cart cleared. Terminal until `reset`.
  Succeeded { order_id: Uuid },
}

/// Outcome of a `submit` call that did not error.
///
/// A failed submission is not an outcome: it surfaces as an error, and the
/// flow returns to `CheckoutState::Idle` with the cart intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// The order was accepted by the backend.
  Placed(OrderReceipt),
  /// No delivery address is selected; run the address picker and submit
  /// again.
  AddressRequired,
}
