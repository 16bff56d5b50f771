// client/src/models/address.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved delivery address, owned by the user account.
///
/// The cart flow selects one of these; creating or editing them happens in
/// the address-picker sub-flow, not during checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAddress {
  pub id: Uuid,
  /// Display label ("Home", "Office", ...).
  pub label: String,
  pub address_line1: String,
  pub address_line2: Option<String>,
  pub city: String,
  pub pincode: String,
  pub latitude: f64,
  pub longitude: f64,
  pub is_default: bool,
}

/// Payload for creating a saved address from the map picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAddress {
  pub label: String,
  pub address_line1: String,
  pub address_line2: Option<String>,
  pub city: String,
  pub pincode: String,
  pub latitude: f64,
  pub longitude: f64,
  pub is_default: bool,
}
