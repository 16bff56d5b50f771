// core/examples/checkout_flow.rs

use async_trait::async_trait;
use rasoi::{
  Cart, CheckoutFlow, NewLineItem, OrderDraft, OrderGateway, OrderReceipt, PricingPolicy,
  RasoiError, Shared, SubmitOutcome,
};
use tracing::info;
use uuid::Uuid;

// An in-memory gateway standing in for the order-creation endpoint.
struct AcceptingGateway;

#[async_trait]
impl OrderGateway for AcceptingGateway {
  async fn submit_order(&self, draft: &OrderDraft) -> anyhow::Result<OrderReceipt> {
    Ok(OrderReceipt {
      order_id: Uuid::new_v4(),
      total_cents: draft.summary.total_cents,
      currency: "INR".to_string(),
    })
  }
}

#[tokio::main]
async fn main() -> Result<(), RasoiError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Checkout Flow Example ---");

  let cart = Shared::new(Cart::new());
  cart.write().add(NewLineItem {
    food_id: Uuid::new_v4(),
    food_name: "Masala Dosa".to_string(),
    size: "full".to_string(),
    price_id: Uuid::new_v4(),
    unit_price_cents: 9_500,
    quantity: 3,
    chef_id: Uuid::new_v4(),
    chef_name: "Lakshmi".to_string(),
  });

  let mut flow = CheckoutFlow::new(cart.clone(), PricingPolicy::default(), AcceptingGateway);
  flow.authenticate(Uuid::new_v4());

  // First attempt parks on the missing address.
  match flow.submit().await? {
    SubmitOutcome::AddressRequired => info!("Flow is waiting on an address, as expected."),
    other => info!("Unexpected outcome: {:?}", other),
  }

  // The surface picks one and re-invokes checkout.
  flow.select_address(Uuid::new_v4());
  match flow.submit().await? {
    SubmitOutcome::Placed(receipt) => {
      info!(
        "Order {} placed for {} {}. Cart is now empty: {}",
        receipt.order_id,
        receipt.total_cents,
        receipt.currency,
        cart.read().is_empty()
      );
    }
    SubmitOutcome::AddressRequired => info!("Still waiting on an address?"),
  }

  Ok(())
}
