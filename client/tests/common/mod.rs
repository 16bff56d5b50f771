// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use rasoi::NewLineItem;
use rasoi_client::{BackendClient, ClientConfig};
use tracing::Level;
use uuid::Uuid;

// --- Deterministic identities ---

pub fn user_id() -> Uuid {
  Uuid::from_u128(0x05_E0)
}

pub fn address_id() -> Uuid {
  Uuid::from_u128(0xAD_D0)
}

pub fn chef_id(n: u8) -> Uuid {
  Uuid::from_u128(0xC0_00 + u128::from(n))
}

pub fn food_id(n: u8) -> Uuid {
  Uuid::from_u128(0xF0_00 + u128::from(n))
}

pub fn price_id(n: u8) -> Uuid {
  Uuid::from_u128(0x50_00 + u128::from(n))
}

// --- Builders ---

pub fn config_for(server_url: &str) -> ClientConfig {
  ClientConfig {
    api_base_url: server_url.to_string(),
    user_id: Some(user_id()),
    ..ClientConfig::default()
  }
}

pub fn client_for(server_url: &str) -> BackendClient {
  BackendClient::new(&config_for(server_url)).expect("client must build")
}

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
