// src/lib.rs

//! Rasoi client: the data layer behind the platform's admin, customer,
//! chef, and delivery-agent surfaces.
//!
//! The crate provides:
//!  - `BackendClient`, a typed reqwest client for the backend REST surface
//!    (orders, addresses, dashboard data, users/approvals, documents).
//!  - Dashboard view-state: chart-series normalisation with synthetic
//!    fallback data, and a polling activity feed.
//!  - `ShopSession`, wiring the shared cart, pricing policy, and checkout
//!    flow from the `rasoi` engine to the backend client, including the
//!    address-picker fallback sub-flow.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod session;

// --- Re-exports for the Public API ---

pub use crate::api::{BackendClient, SeriesMetric};
pub use crate::config::ClientConfig;
pub use crate::errors::{ClientError, Result};
pub use crate::session::{CheckoutProgress, ShopSession};
