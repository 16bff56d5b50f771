// client/src/api/dashboard.rs

use crate::api::BackendClient;
use crate::errors::Result;
use crate::models::{ActivityItem, DashboardStats, DeliveryRecord, SeriesPoint};

/// Which precomputed time-series to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMetric {
  Orders,
  Revenue,
}

impl SeriesMetric {
  pub fn as_str(&self) -> &'static str {
    match self {
      SeriesMetric::Orders => "orders",
      SeriesMetric::Revenue => "revenue",
    }
  }
}

impl std::fmt::Display for SeriesMetric {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl BackendClient {
  /// Precomputed headline statistics for the admin dashboard.
  pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
    self.get_json("/dashboard/stats").await
  }

  /// Daily time-series for `metric` over the trailing `days` days.
  pub async fn metric_series(&self, metric: SeriesMetric, days: u32) -> Result<Vec<SeriesPoint>> {
    self
      .get_json(&format!("/dashboard/series/{}?days={}", metric, days))
      .await
  }

  pub async fn recent_activities(&self) -> Result<Vec<ActivityItem>> {
    self.get_json("/activities/recent").await
  }

  pub async fn recent_deliveries(&self) -> Result<Vec<DeliveryRecord>> {
    self.get_json("/deliveries/recent").await
  }
}
