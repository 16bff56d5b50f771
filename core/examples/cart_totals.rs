// core/examples/cart_totals.rs

use rasoi::{group_by_chef, Cart, NewLineItem, PricingPolicy};
use tracing::info;
use uuid::Uuid;

// Build a small cart and show totals and per-chef grouping, the way the
// cart page derives them on every render.

fn dish(name: &str, chef: &str, size: &str, unit_price_cents: i64, quantity: i32) -> NewLineItem {
  NewLineItem {
    food_id: Uuid::new_v4(),
    food_name: name.to_string(),
    size: size.to_string(),
    price_id: Uuid::new_v4(),
    unit_price_cents,
    quantity,
    chef_id: Uuid::new_v5(&Uuid::NAMESPACE_OID, chef.as_bytes()),
    chef_name: chef.to_string(),
  }
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Cart Totals Example ---");

  let mut cart = Cart::new();
  cart.add(dish("Paneer Tikka", "Asha", "full", 25_000, 2));
  cart.add(dish("Dal Makhani", "Asha", "half", 12_000, 1));
  cart.add(dish("Chicken Biryani", "Irfan", "full", 18_000, 1));

  let summary = PricingPolicy::default().summarize(&cart);
  info!(
    "Subtotal: {} | Tax: {} | Delivery fee: {} | Total: {}",
    summary.subtotal_cents, summary.tax_cents, summary.delivery_fee_cents, summary.total_cents
  );

  for group in group_by_chef(&cart) {
    info!(
      "Chef {} — {} line(s), subtotal {}",
      group.chef_name,
      group.lines.len(),
      group.subtotal_cents
    );
  }
}
