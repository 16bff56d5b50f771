// core/src/pricing.rs

//! Order-summary arithmetic: subtotal, tax, and delivery-fee derivation.

use crate::cart::Cart;
use serde::{Deserialize, Serialize};

/// How the delivery fee is derived for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryFeeRule {
  /// Flat fee below a free-delivery threshold, zero at or above it.
  FlatBelowThreshold { fee_cents: i64, threshold_cents: i64 },
  /// The fee is quoted server-side once the delivery address is known;
  /// client-side summaries carry zero.
  QuotedAtCheckout,
}

/// Tax rate and delivery-fee schedule applied to a cart.
///
/// Two client variants historically disagreed on the tax rate and the fee
/// threshold; the policy is a single configurable value now, so a deployment
/// picks one instead of shipping both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
  /// Tax rate in basis points (500 = 5%).
  pub tax_rate_bps: u32,
  pub delivery_fee: DeliveryFeeRule,
}

impl Default for PricingPolicy {
  /// 5% tax; flat 40.00 fee below a 300.00 free-delivery threshold.
  fn default() -> Self {
    Self {
      tax_rate_bps: 500,
      delivery_fee: DeliveryFeeRule::FlatBelowThreshold {
        fee_cents: 4_000,
        threshold_cents: 30_000,
      },
    }
  }
}

/// Derived totals for the current cart.
///
/// A pure function of the line-item set and the policy; recomputed on
/// demand, never cached across mutations, no independent identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
  pub subtotal_cents: i64,
  pub tax_cents: i64,
  pub delivery_fee_cents: i64,
  pub total_cents: i64,
}

impl PricingPolicy {
  /// Derives the order summary for `cart`.
  ///
  /// An empty cart yields all-zero totals, including the delivery fee.
  pub fn summarize(&self, cart: &Cart) -> OrderSummary {
    if cart.is_empty() {
      return OrderSummary::default();
    }

    let subtotal_cents = cart.subtotal_cents();
    let tax_cents = apply_bps(subtotal_cents, self.tax_rate_bps);
    let delivery_fee_cents = match self.delivery_fee {
      DeliveryFeeRule::FlatBelowThreshold {
        fee_cents,
        threshold_cents,
      } if subtotal_cents < threshold_cents => fee_cents,
      DeliveryFeeRule::FlatBelowThreshold { .. } => 0,
      DeliveryFeeRule::QuotedAtCheckout => 0,
    };

    OrderSummary {
      subtotal_cents,
      tax_cents,
      delivery_fee_cents,
      total_cents: subtotal_cents + tax_cents + delivery_fee_cents,
    }
  }
}

/// Applies a basis-point rate in integer arithmetic, rounding half up.
fn apply_bps(amount_cents: i64, rate_bps: u32) -> i64 {
  (amount_cents * i64::from(rate_bps) + 5_000) / 10_000
}
