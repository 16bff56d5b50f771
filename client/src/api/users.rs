// client/src/api/users.rs

use crate::api::BackendClient;
use crate::errors::Result;
use crate::models::{ApprovalStatus, UserAccount};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

impl BackendClient {
  /// All platform users, for the admin surface.
  pub async fn users(&self) -> Result<Vec<UserAccount>> {
    self.get_json("/users").await
  }

  /// Approves or rejects a chef / delivery-agent application.
  pub async fn set_approval(&self, user_id: Uuid, status: ApprovalStatus) -> Result<UserAccount> {
    let updated: UserAccount = self
      .put_json(&format!("/users/{}/approval", user_id), &json!({ "status": status }))
      .await?;
    info!(user_id = %user_id, status = ?status, "Approval status updated.");
    Ok(updated)
  }
}
