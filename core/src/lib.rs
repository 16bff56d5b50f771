// src/lib.rs

//! Rasoi core: cart aggregation, pricing, and checkout flow for the Rasoi
//! food-delivery client surfaces.
//!
//! The crate provides:
//!  - An ordered cart store with merge-on-add and clamp-to-removal semantics.
//!  - Order-summary derivation (subtotal, tax, delivery fee) from a
//!    configurable pricing policy.
//!  - A per-chef grouping transform for display ordering.
//!  - The checkout state machine (Idle → AwaitingAddress → Submitting →
//!    Succeeded) over an async order-gateway seam.
//!  - A `Shared<T>` cell for session state handed between the mutating
//!    surface and the checkout flow.

// Declare modules according to the planned structure
pub mod cart;
pub mod checkout;
pub mod error;
pub mod grouping;
pub mod pricing;
pub mod shared;

// --- Re-exports for the Public API ---

// Core types that callers interact with frequently
pub use crate::cart::{Cart, CartLineItem, NewLineItem};
pub use crate::pricing::{DeliveryFeeRule, OrderSummary, PricingPolicy};

pub use crate::grouping::{group_by_chef, ChefGroup};

// The checkout flow and its collaborator seam
pub use crate::checkout::{
  CheckoutFlow, CheckoutState, OrderDraft, OrderGateway, OrderLine, OrderReceipt, SubmitOutcome,
};

pub use crate::shared::Shared;

pub use crate::error::{RasoiError, RasoiResult};

/*
    Core Workflow:
    1. Put a `Cart` in a `Shared` cell and hand one handle to the UI surface.
    2. Mutate it through `add` / `update_quantity` / `remove` / `clear`.
    3. Derive totals with `PricingPolicy::summarize` and display groups with
       `group_by_chef` on every render; neither is ever cached.
    4. Build a `CheckoutFlow` over the same cell with an `OrderGateway`
       implementation, `authenticate` it, `select_address`, then `submit`.
    5. `submit` clears the cart on success and leaves it intact on failure.
*/
