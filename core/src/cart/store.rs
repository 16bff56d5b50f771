// core/src/cart/store.rs

//! The ordered line-item collection and its mutation API.

use crate::cart::line_item::{CartLineItem, NewLineItem};
use tracing::{event, Level};
use uuid::Uuid;

/// The session cart.
///
/// Lines keep their insertion order. None of the mutations can fail; invalid
/// requests (non-positive quantities, unknown ids) degrade to no-ops or
/// removals rather than errors, matching how the surfaces treat them.
#[derive(Debug, Clone, Default)]
pub struct Cart {
  lines: Vec<CartLineItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self { lines: Vec::new() }
  }

  /// Adds an item to the cart.
  ///
  /// A line with the same food/size/chef combination has its quantity
  /// incremented instead of a duplicate line being appended. A non-positive
  /// quantity clamps to removal, i.e. the add is silently a no-op.
  ///
  /// Returns the id of the affected line, or `None` for the no-op case.
  pub fn add(&mut self, item: NewLineItem) -> Option<Uuid> {
    if item.quantity <= 0 {
      event!(
        Level::WARN,
        food_id = %item.food_id,
        quantity = item.quantity,
        "Ignoring add with non-positive quantity."
      );
      return None;
    }

    if let Some(line) = self.lines.iter_mut().find(|l| l.merges_with(&item)) {
      line.quantity += item.quantity;
      line.recompute_subtotal();
      event!(
        Level::DEBUG,
        line_id = %line.id,
        quantity = line.quantity,
        "Merged add into existing cart line."
      );
      return Some(line.id);
    }

    let line = CartLineItem::from_new(item);
    let id = line.id;
    self.lines.push(line);
    event!(Level::DEBUG, line_id = %id, "Appended new cart line.");
    Some(id)
  }

  /// Sets a line's quantity, recomputing its subtotal. A value of zero or
  /// less is equivalent to `remove`. No-op if the line is absent.
  pub fn update_quantity(&mut self, item_id: Uuid, quantity: i32) {
    if quantity <= 0 {
      self.remove(item_id);
      return;
    }
    if let Some(line) = self.lines.iter_mut().find(|l| l.id == item_id) {
      line.quantity = quantity;
      line.recompute_subtotal();
    }
  }

  /// Deletes a line. No-op if absent.
  pub fn remove(&mut self, item_id: Uuid) {
    self.lines.retain(|l| l.id != item_id);
  }

  /// Empties the collection.
  pub fn clear(&mut self) {
    self.lines.clear();
  }

  pub fn lines(&self) -> &[CartLineItem] {
    &self.lines
  }

  pub fn line(&self, item_id: Uuid) -> Option<&CartLineItem> {
    self.lines.iter().find(|l| l.id == item_id)
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  /// Sum of line subtotals.
  pub fn subtotal_cents(&self) -> i64 {
    self.lines.iter().map(|l| l.subtotal_cents).sum()
  }
}
