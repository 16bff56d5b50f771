// client/src/api/addresses.rs

use crate::api::BackendClient;
use crate::errors::Result;
use crate::models::{DeliveryAddress, NewAddress};
use uuid::Uuid;

impl BackendClient {
  /// The user's saved delivery addresses.
  pub async fn addresses(&self) -> Result<Vec<DeliveryAddress>> {
    self.get_json("/addresses").await
  }

  pub async fn create_address(&self, address: &NewAddress) -> Result<DeliveryAddress> {
    self.post_json("/addresses", address).await
  }

  pub async fn delete_address(&self, address_id: Uuid) -> Result<()> {
    self.delete(&format!("/addresses/{}", address_id)).await
  }
}
