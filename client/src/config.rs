// client/src/config.rs

use crate::errors::{ClientError, Result};
use dotenvy::dotenv;
use rasoi::{DeliveryFeeRule, PricingPolicy};
use std::env;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub api_base_url: String,
  /// Session identity sent as the `X-User-ID` header; absent until sign-in.
  pub user_id: Option<Uuid>,
  pub request_timeout_secs: u64,
  pub poll_interval_secs: u64,
  pub currency: String,

  // Pricing policy knobs; one deployed value instead of the historical
  // per-surface drift.
  pub tax_rate_bps: u32,
  pub delivery_fee_cents: i64,
  pub free_delivery_threshold_cents: i64,
  pub delivery_fee_at_checkout: bool,
}

impl ClientConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name);

    let api_base_url =
      get_env("RASOI_API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080/api/v1".to_string());

    let user_id = match get_env("RASOI_USER_ID") {
      Ok(raw) => Some(
        Uuid::parse_str(&raw)
          .map_err(|e| ClientError::Config(format!("Invalid RASOI_USER_ID: {}", e)))?,
      ),
      Err(_) => None,
    };

    let request_timeout_secs = parse_or("RASOI_REQUEST_TIMEOUT_SECS", 30)?;
    let poll_interval_secs = parse_or("RASOI_POLL_INTERVAL_SECS", 30)?;
    let currency = get_env("RASOI_CURRENCY").unwrap_or_else(|_| "INR".to_string());

    let tax_rate_bps = parse_or("RASOI_TAX_RATE_BPS", 500)?;
    let delivery_fee_cents = parse_or("RASOI_DELIVERY_FEE_CENTS", 4_000)?;
    let free_delivery_threshold_cents = parse_or("RASOI_FREE_DELIVERY_THRESHOLD_CENTS", 30_000)?;
    let delivery_fee_at_checkout = parse_or("RASOI_FEE_AT_CHECKOUT", false)?;

    tracing::info!("Client configuration loaded successfully.");

    Ok(Self {
      api_base_url,
      user_id,
      request_timeout_secs,
      poll_interval_secs,
      currency,
      tax_rate_bps,
      delivery_fee_cents,
      free_delivery_threshold_cents,
      delivery_fee_at_checkout,
    })
  }

  /// The pricing policy this deployment applies client-side.
  pub fn pricing(&self) -> PricingPolicy {
    let delivery_fee = if self.delivery_fee_at_checkout {
      DeliveryFeeRule::QuotedAtCheckout
    } else {
      DeliveryFeeRule::FlatBelowThreshold {
        fee_cents: self.delivery_fee_cents,
        threshold_cents: self.free_delivery_threshold_cents,
      }
    };
    PricingPolicy {
      tax_rate_bps: self.tax_rate_bps,
      delivery_fee,
    }
  }
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base_url: "http://127.0.0.1:8080/api/v1".to_string(),
      user_id: None,
      request_timeout_secs: 30,
      poll_interval_secs: 30,
      currency: "INR".to_string(),
      tax_rate_bps: 500,
      delivery_fee_cents: 4_000,
      free_delivery_threshold_cents: 30_000,
      delivery_fee_at_checkout: false,
    }
  }
}

fn parse_or<T: std::str::FromStr>(var_name: &str, default: T) -> Result<T>
where
  T::Err: std::fmt::Display,
{
  match env::var(var_name) {
    Ok(raw) => raw
      .parse::<T>()
      .map_err(|e| ClientError::Config(format!("Invalid {}: {}", var_name, e))),
    Err(_) => Ok(default),
  }
}
