// core/src/grouping.rs

//! Partitioning the flat line-item list into per-chef groups.
//!
//! Orders are fulfilled per chef, so the surfaces render the cart grouped by
//! chef identity. This is a stateless fold over the list, re-run on every
//! render; no grouping state is persisted.

use crate::cart::{Cart, CartLineItem};
use serde::Serialize;
use uuid::Uuid;

/// One chef's slice of the cart.
#[derive(Debug, Clone, Serialize)]
pub struct ChefGroup {
  pub chef_id: Uuid,
  pub chef_name: String,
  pub lines: Vec<CartLineItem>,
  pub subtotal_cents: i64,
}

/// Partitions the cart by chef identity.
///
/// Every line lands in exactly one group, groups appear in the order their
/// chef first appears in the cart, and the group subtotals sum to the cart
/// subtotal.
pub fn group_by_chef(cart: &Cart) -> Vec<ChefGroup> {
  let mut groups: Vec<ChefGroup> = Vec::new();
  for line in cart.lines() {
    match groups.iter_mut().find(|g| g.chef_id == line.chef_id) {
      Some(group) => {
        group.subtotal_cents += line.subtotal_cents;
        group.lines.push(line.clone());
      }
      None => groups.push(ChefGroup {
        chef_id: line.chef_id,
        chef_name: line.chef_name.clone(),
        lines: vec![line.clone()],
        subtotal_cents: line.subtotal_cents,
      }),
    }
  }
  groups
}
