// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use parking_lot::Mutex;
use rasoi::{Cart, NewLineItem, OrderDraft, OrderGateway, OrderReceipt};
use tracing::Level;
use uuid::Uuid;

// --- Deterministic identities ---

pub fn chef_id(n: u8) -> Uuid {
  Uuid::from_u128(0xC0_00 + u128::from(n))
}

pub fn food_id(n: u8) -> Uuid {
  Uuid::from_u128(0xF0_00 + u128::from(n))
}

pub fn price_id(n: u8) -> Uuid {
  Uuid::from_u128(0x50_00 + u128::from(n))
}

pub fn address_id() -> Uuid {
  Uuid::from_u128(0xAD_D0)
}

pub fn user_id() -> Uuid {
  Uuid::from_u128(0x05_E0)
}

// --- Item builders ---

pub fn item(food: u8, chef: u8, size: &str, unit_price_cents: i64, quantity: i32) -> NewLineItem {
  NewLineItem {
    food_id: food_id(food),
    food_name: format!("food-{food}"),
    size: size.to_string(),
    price_id: price_id(food),
    unit_price_cents,
    quantity,
    chef_id: chef_id(chef),
    chef_name: format!("chef-{chef}"),
  }
}

/// The worked-example cart: 250.00 x2 and 180.00 x1, two chefs.
pub fn sample_cart() -> Cart {
  let mut cart = Cart::new();
  cart.add(item(1, 1, "full", 25_000, 2));
  cart.add(item(2, 2, "half", 18_000, 1));
  cart
}

/// Asserts the per-line subtotal invariant over the whole cart.
pub fn assert_line_invariant(cart: &Cart) {
  for line in cart.lines() {
    assert_eq!(
      line.subtotal_cents,
      line.unit_price_cents * i64::from(line.quantity),
      "subtotal invariant broken for line {}",
      line.id
    );
  }
}

// --- Gateways for flow tests ---

/// Records every submitted draft and accepts the order.
#[derive(Default)]
pub struct RecordingGateway {
  pub submitted: Mutex<Vec<OrderDraft>>,
}

#[async_trait]
impl OrderGateway for RecordingGateway {
  async fn submit_order(&self, draft: &OrderDraft) -> anyhow::Result<OrderReceipt> {
    self.submitted.lock().push(draft.clone());
    Ok(OrderReceipt {
      order_id: Uuid::from_u128(0x0D_DE),
      total_cents: draft.summary.total_cents,
      currency: "INR".to_string(),
    })
  }
}

/// Rejects every submission with a fixed message.
pub struct FailingGateway {
  pub message: &'static str,
}

#[async_trait]
impl OrderGateway for FailingGateway {
  async fn submit_order(&self, _draft: &OrderDraft) -> anyhow::Result<OrderReceipt> {
    Err(anyhow::anyhow!(self.message))
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
