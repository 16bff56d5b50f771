// tests/session_tests.rs
mod common;

use common::*;
use mockito::Matcher;
use rasoi::{CheckoutState, PricingPolicy, RasoiError};
use rasoi_client::{BackendClient, CheckoutProgress, ClientError, ShopSession};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

fn session_for(server_url: &str) -> ShopSession {
  let client = Arc::new(client_for(server_url));
  ShopSession::new(client, PricingPolicy::default())
}

fn address_json(id: Uuid, label: &str, is_default: bool) -> serde_json::Value {
  json!({
    "id": id,
    "label": label,
    "address_line1": "12 MG Road",
    "address_line2": null,
    "city": "Pune",
    "pincode": "411001",
    "latitude": 18.5204,
    "longitude": 73.8567,
    "is_default": is_default
  })
}

#[tokio::test]
async fn test_checkout_uses_saved_default_address() {
  setup_tracing();
  let mut server = mockito::Server::new_async().await;
  let order_id = Uuid::from_u128(0x0D_DE);

  let addresses_mock = server
    .mock("GET", "/addresses")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      json!([
        address_json(Uuid::from_u128(0xA1), "Office", false),
        address_json(address_id(), "Home", true)
      ])
      .to_string(),
    )
    .create_async()
    .await;

  let orders_mock = server
    .mock("POST", "/orders")
    .match_body(Matcher::PartialJson(json!({ "address_id": address_id() })))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(json!({ "order_id": order_id, "total_cents": 71_400, "currency": "INR" }).to_string())
    .create_async()
    .await;

  let mut session = session_for(&server.url());
  session.add_item(item(1, 1, "full", 25_000, 2));
  session.add_item(item(2, 2, "half", 18_000, 1));
  assert_eq!(session.totals().total_cents, 71_400);

  let progress = session.checkout().await.unwrap();

  match progress {
    CheckoutProgress::Placed(receipt) => assert_eq!(receipt.order_id, order_id),
    other => panic!("expected Placed, got {:?}", other),
  }
  assert!(session.lines().is_empty(), "cart must be cleared after placement");
  assert!(matches!(session.checkout_state(), CheckoutState::Succeeded { .. }));
  addresses_mock.assert_async().await;
  orders_mock.assert_async().await;
}

#[tokio::test]
async fn test_checkout_hands_back_candidates_without_default_address() {
  setup_tracing();
  let mut server = mockito::Server::new_async().await;

  server
    .mock("GET", "/addresses")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      json!([
        address_json(Uuid::from_u128(0xA1), "Office", false),
        address_json(Uuid::from_u128(0xA2), "Hostel", false)
      ])
      .to_string(),
    )
    .create_async()
    .await;

  let order_id = Uuid::from_u128(0x0D_DF);
  server
    .mock("POST", "/orders")
    .match_body(Matcher::PartialJson(json!({ "address_id": Uuid::from_u128(0xA2) })))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(json!({ "order_id": order_id, "total_cents": 30_250, "currency": "INR" }).to_string())
    .create_async()
    .await;

  let mut session = session_for(&server.url());
  session.add_item(item(1, 1, "full", 25_000, 1));

  // First attempt: the picker sub-flow is required.
  let progress = session.checkout().await.unwrap();
  let candidates = match progress {
    CheckoutProgress::ChooseAddress(candidates) => candidates,
    other => panic!("expected ChooseAddress, got {:?}", other),
  };
  assert_eq!(candidates.len(), 2);
  assert_eq!(session.lines().len(), 1, "cart untouched while waiting on the picker");
  assert_eq!(session.checkout_state(), CheckoutState::AwaitingAddress);

  // The surface picks one; checkout goes through.
  session.select_address(candidates[1].id);
  let progress = session.checkout().await.unwrap();
  assert!(matches!(progress, CheckoutProgress::Placed(_)));
  assert!(session.lines().is_empty());
}

#[tokio::test]
async fn test_failed_submission_keeps_cart_for_retry() {
  setup_tracing();
  let mut server = mockito::Server::new_async().await;
  server
    .mock("POST", "/orders")
    .with_status(500)
    .with_header("content-type", "application/json")
    .with_body(json!({ "error": "chef offline" }).to_string())
    .create_async()
    .await;

  let mut session = session_for(&server.url());
  session.add_item(item(1, 1, "full", 25_000, 2));
  session.select_address(address_id());

  let error = session.checkout().await.unwrap_err();

  match error {
    ClientError::Checkout {
      source: RasoiError::Gateway { source },
    } => {
      assert!(source.to_string().contains("chef offline"));
    }
    other => panic!("expected wrapped gateway error, got {:?}", other),
  }
  assert_eq!(session.lines().len(), 1, "cart must survive a failed checkout");
  assert_eq!(session.checkout_state(), CheckoutState::Idle);
  assert!(session.last_error().unwrap().contains("chef offline"));
}

#[tokio::test]
async fn test_checkout_requires_signed_in_user() {
  setup_tracing();
  let server = mockito::Server::new_async().await;

  // A client with no attached user: the session cannot authenticate the flow.
  let mut config = config_for(&server.url());
  config.user_id = None;
  let client = Arc::new(BackendClient::new(&config).unwrap());
  let mut session = ShopSession::new(client, PricingPolicy::default());

  session.add_item(item(1, 1, "full", 25_000, 1));
  session.select_address(address_id());

  let error = session.checkout().await.unwrap_err();

  assert!(matches!(
    error,
    ClientError::Checkout {
      source: RasoiError::AuthRequired
    }
  ));
  assert_eq!(session.lines().len(), 1);
}
