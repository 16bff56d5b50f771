// client/src/models/order.rs

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catering-style order: priced per person for an event, distinct from
/// the standard cart flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkOrderRequest {
  pub chef_id: Uuid,
  pub address_id: Uuid,
  pub event_date: NaiveDate,
  pub event_time: NaiveTime,
  pub guest_count: u32,
  pub per_person_cents: i64,
  pub instructions: Option<String>,
}
