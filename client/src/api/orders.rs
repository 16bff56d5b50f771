// client/src/api/orders.rs

use crate::api::BackendClient;
use crate::errors::Result;
use crate::models::{BulkOrderRequest, OrderRecord};
use async_trait::async_trait;
use rasoi::{OrderDraft, OrderGateway, OrderReceipt};
use tracing::{info, instrument};

impl BackendClient {
  /// Recent orders for the dashboard list.
  pub async fn recent_orders(&self) -> Result<Vec<OrderRecord>> {
    self.get_json("/orders/recent").await
  }

  /// Submits a catering order. Bulk orders bypass the cart entirely.
  #[instrument(name = "BackendClient::submit_bulk_order", skip_all, fields(chef_id = %request.chef_id, guests = request.guest_count))]
  pub async fn submit_bulk_order(&self, request: &BulkOrderRequest) -> Result<OrderReceipt> {
    let receipt: OrderReceipt = self.post_json("/orders/bulk", request).await?;
    info!(order_id = %receipt.order_id, "Bulk order placed.");
    Ok(receipt)
  }
}

// The checkout flow's collaborator seam: submitting the cart snapshot plus
// address reference to the order-creation endpoint.
#[async_trait]
impl OrderGateway for BackendClient {
  #[instrument(name = "BackendClient::submit_order", skip_all, fields(lines = draft.lines.len()))]
  async fn submit_order(&self, draft: &OrderDraft) -> anyhow::Result<OrderReceipt> {
    let receipt: OrderReceipt = self.post_json("/orders", draft).await?;
    info!(order_id = %receipt.order_id, "Order accepted by backend.");
    Ok(receipt)
  }
}
