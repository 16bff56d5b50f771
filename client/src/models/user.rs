// client/src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
  Admin,
  Customer,
  Chef,
  DeliveryAgent,
}

/// Approval state for chef and delivery-agent applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
  Pending,
  Approved,
  Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub role: Role,
  /// Only present for roles that go through approval.
  pub approval: Option<ApprovalStatus>,
  pub joined_at: DateTime<Utc>,
}
