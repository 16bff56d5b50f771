// core/src/cart/line_item.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for `Cart::add`: everything a line item needs except its identity
/// and derived subtotal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLineItem {
  pub food_id: Uuid,
  pub food_name: String,
  /// Display label of the chosen portion ("half", "full", ...).
  pub size: String,
  /// Price row backing this food/size variant; sent to the backend at
  /// submission time.
  pub price_id: Uuid,
  pub unit_price_cents: i64,
  pub quantity: i32,
  pub chef_id: Uuid,
  pub chef_name: String,
}

/// One entry in a cart: a specific food/size/chef/quantity combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineItem {
  pub id: Uuid,
  pub food_id: Uuid,
  pub food_name: String,
  pub size: String,
  pub price_id: Uuid,
  pub unit_price_cents: i64,
  pub quantity: i32,
  pub chef_id: Uuid,
  pub chef_name: String,
  /// Always `unit_price_cents * quantity`. Recomputed on every mutation,
  /// never persisted independently.
  pub subtotal_cents: i64,
}

impl CartLineItem {
  pub(crate) fn from_new(item: NewLineItem) -> Self {
    let mut line = Self {
      id: Uuid::new_v4(),
      food_id: item.food_id,
      food_name: item.food_name,
      size: item.size,
      price_id: item.price_id,
      unit_price_cents: item.unit_price_cents,
      quantity: item.quantity,
      chef_id: item.chef_id,
      chef_name: item.chef_name,
      subtotal_cents: 0,
    };
    line.recompute_subtotal();
    line
  }

  /// Same food/size/chef combination as `incoming`: the cart merge key.
  pub fn merges_with(&self, incoming: &NewLineItem) -> bool {
    self.food_id == incoming.food_id && self.size == incoming.size && self.chef_id == incoming.chef_id
  }

  pub(crate) fn recompute_subtotal(&mut self) {
    self.subtotal_cents = self.unit_price_cents * i64::from(self.quantity);
  }
}
