// core/src/checkout/gateway.rs

//! The order-creation collaborator seam.
//!
//! The flow treats order submission as an opaque, fallible async call: the
//! client crate implements this trait against the platform backend, and
//! tests implement it in memory.

use crate::cart::Cart;
use crate::pricing::OrderSummary;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// One submitted line: the triple the order-creation endpoint consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
  pub food_id: Uuid,
  pub price_id: Uuid,
  pub quantity: i32,
}

/// The full submission payload: cart snapshot, delivery-address reference,
/// and the client-side summary for the backend to verify against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
  pub user_id: Uuid,
  pub address_id: Uuid,
  pub lines: Vec<OrderLine>,
  pub summary: OrderSummary,
}

impl OrderDraft {
  /// Snapshots `cart` into submission lines, preserving cart order.
  pub fn from_cart(cart: &Cart, user_id: Uuid, address_id: Uuid, summary: OrderSummary) -> Self {
    let lines = cart
      .lines()
      .iter()
      .map(|l| OrderLine {
        food_id: l.food_id,
        price_id: l.price_id,
        quantity: l.quantity,
      })
      .collect();
    Self {
      user_id,
      address_id,
      lines,
      summary,
    }
  }
}

/// What the backend returns for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
  pub order_id: Uuid,
  pub total_cents: i64,
  pub currency: String,
}

/// Asynchronous order-creation collaborator.
#[async_trait]
pub trait OrderGateway: Send + Sync {
  /// Submits the draft. Errors are surfaced verbatim to the flow, which
  /// wraps them into `RasoiError::Gateway` and leaves the cart intact.
  async fn submit_order(&self, draft: &OrderDraft) -> anyhow::Result<OrderReceipt>;
}

#[async_trait]
impl<G: OrderGateway + ?Sized> OrderGateway for Arc<G> {
  async fn submit_order(&self, draft: &OrderDraft) -> anyhow::Result<OrderReceipt> {
    (**self).submit_order(draft).await
  }
}
