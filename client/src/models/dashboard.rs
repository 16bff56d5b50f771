// client/src/models/dashboard.rs

//! Read-only DTOs behind the dashboard views. All numbers are precomputed
//! server-side; the client only renders them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
  pub total_orders: u64,
  pub total_revenue_cents: i64,
  pub active_chefs: u32,
  pub deliveries_in_progress: u32,
  pub pending_approvals: u32,
}

/// One point of a time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
  pub date: NaiveDate,
  pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
  OrderPlaced,
  OrderDelivered,
  ChefRegistered,
  AgentRegistered,
  #[serde(other)]
  Other,
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
  pub id: Uuid,
  pub kind: ActivityKind,
  pub message: String,
  pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
  pub id: Uuid,
  pub customer_name: String,
  pub total_cents: i64,
  pub status: String,
  pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRecord {
  pub id: Uuid,
  pub order_id: Uuid,
  pub agent_name: String,
  pub status: String,
  pub updated_at: DateTime<Utc>,
}
