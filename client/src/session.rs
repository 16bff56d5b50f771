// client/src/session.rs

//! `ShopSession`: the customer surface's wiring of cart, pricing, and
//! checkout against the backend client.

use crate::api::BackendClient;
use crate::errors::{ClientError, Result};
use crate::models::DeliveryAddress;
use rasoi::{
  group_by_chef, Cart, CartLineItem, ChefGroup, CheckoutFlow, CheckoutState, NewLineItem,
  OrderReceipt, OrderSummary, PricingPolicy, Shared, SubmitOutcome,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// What a `checkout` call produced.
#[derive(Debug)]
pub enum CheckoutProgress {
  /// The order was placed; the cart is already cleared.
  Placed(OrderReceipt),
  /// No address is selected and none of the saved ones is a default; the
  /// surface must run the address picker over these candidates and call
  /// `select_address` before checking out again.
  ChooseAddress(Vec<DeliveryAddress>),
}

/// One user's shopping session.
///
/// Owns the shared cart and the checkout flow; the cart mutations mirror
/// the cart page, `checkout` mirrors the place-order button including the
/// address fallback sub-flow.
pub struct ShopSession {
  cart: Shared<Cart>,
  policy: PricingPolicy,
  flow: CheckoutFlow<Arc<BackendClient>>,
  client: Arc<BackendClient>,
}

impl ShopSession {
  pub fn new(client: Arc<BackendClient>, policy: PricingPolicy) -> Self {
    let cart = Shared::new(Cart::new());
    let mut flow = CheckoutFlow::new(cart.clone(), policy, client.clone());
    if let Some(user_id) = client.user_id() {
      flow.authenticate(user_id);
    }
    Self {
      cart,
      policy,
      flow,
      client,
    }
  }

  // --- Cart surface ---

  pub fn add_item(&self, item: NewLineItem) -> Option<Uuid> {
    self.cart.write().add(item)
  }

  pub fn update_quantity(&self, item_id: Uuid, quantity: i32) {
    self.cart.write().update_quantity(item_id, quantity);
  }

  pub fn remove_item(&self, item_id: Uuid) {
    self.cart.write().remove(item_id);
  }

  pub fn clear_cart(&self) {
    self.cart.write().clear();
  }

  pub fn lines(&self) -> Vec<CartLineItem> {
    self.cart.read().lines().to_vec()
  }

  /// Recomputed on every call, as the render cycle expects.
  pub fn totals(&self) -> OrderSummary {
    self.policy.summarize(&self.cart.read())
  }

  pub fn chef_groups(&self) -> Vec<ChefGroup> {
    group_by_chef(&self.cart.read())
  }

  // --- Checkout surface ---

  pub fn checkout_state(&self) -> CheckoutState {
    self.flow.state()
  }

  pub fn last_error(&self) -> Option<String> {
    self.flow.last_error().map(str::to_string)
  }

  pub fn select_address(&mut self, address_id: Uuid) {
    self.flow.select_address(address_id);
  }

  pub fn reset_checkout(&mut self) {
    self.flow.reset();
  }

  /// Runs checkout, including the address fallback: with no address
  /// selected, the saved default is used automatically; without one, the
  /// candidates are handed back for an explicit pick. A failed submission
  /// propagates as an error with the cart intact.
  #[instrument(name = "ShopSession::checkout", skip_all)]
  pub async fn checkout(&mut self) -> Result<CheckoutProgress> {
    match self.flow.submit().await? {
      SubmitOutcome::Placed(receipt) => Ok(CheckoutProgress::Placed(receipt)),
      SubmitOutcome::AddressRequired => {
        let addresses = self.client.addresses().await?;
        match addresses.iter().find(|a| a.is_default) {
          Some(default) => {
            info!(address_id = %default.id, "Using saved default delivery address.");
            self.flow.select_address(default.id);
            match self.flow.submit().await? {
              SubmitOutcome::Placed(receipt) => Ok(CheckoutProgress::Placed(receipt)),
              SubmitOutcome::AddressRequired => Err(ClientError::Internal(
                "checkout demanded an address after one was selected".to_string(),
              )),
            }
          }
          None => {
            info!(candidates = addresses.len(), "No default address; surface must pick one.");
            Ok(CheckoutProgress::ChooseAddress(addresses))
          }
        }
      }
    }
  }
}
