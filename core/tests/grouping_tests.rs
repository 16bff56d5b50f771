// tests/grouping_tests.rs
mod common;

use common::*;
use rasoi::{group_by_chef, Cart};

#[test]
fn test_every_line_lands_in_exactly_one_group() {
  setup_tracing();
  let mut cart = sample_cart();
  cart.add(item(3, 1, "family", 42_000, 1));

  let groups = group_by_chef(&cart);

  let grouped_line_count: usize = groups.iter().map(|g| g.lines.len()).sum();
  assert_eq!(grouped_line_count, cart.len());

  for line in cart.lines() {
    let containing = groups
      .iter()
      .filter(|g| g.lines.iter().any(|l| l.id == line.id))
      .count();
    assert_eq!(containing, 1, "line {} must appear in exactly one group", line.id);
  }
}

#[test]
fn test_group_subtotals_sum_to_cart_subtotal() {
  setup_tracing();
  let mut cart = sample_cart();
  cart.add(item(3, 1, "family", 42_000, 2));
  cart.add(item(4, 3, "full", 9_900, 5));

  let groups = group_by_chef(&cart);

  let grouped_total: i64 = groups.iter().map(|g| g.subtotal_cents).sum();
  assert_eq!(grouped_total, cart.subtotal_cents());
}

#[test]
fn test_groups_keep_first_appearance_order() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(item(1, 2, "full", 10_000, 1));
  cart.add(item(2, 1, "full", 10_000, 1));
  cart.add(item(3, 2, "half", 5_000, 1)); // chef 2 again

  let groups = group_by_chef(&cart);

  assert_eq!(groups.len(), 2);
  assert_eq!(groups[0].chef_id, chef_id(2));
  assert_eq!(groups[1].chef_id, chef_id(1));
  assert_eq!(groups[0].lines.len(), 2);
  assert_eq!(groups[0].subtotal_cents, 15_000);
}

#[test]
fn test_empty_cart_produces_no_groups() {
  setup_tracing();
  let cart = Cart::new();

  assert!(group_by_chef(&cart).is_empty());
}
