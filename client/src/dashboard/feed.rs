// client/src/dashboard/feed.rs

//! The polling recent-activity feed.
//!
//! A timer task re-fetches the feed into a shared slot; whichever response
//! lands last wins, and a failed poll keeps the previous snapshot on
//! screen. Aborting the task handle is the only cancellation there is.

use crate::api::BackendClient;
use crate::models::ActivityItem;
use rasoi::Shared;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

#[derive(Clone, Default)]
pub struct ActivityFeed {
  slot: Shared<Vec<ActivityItem>>,
}

impl ActivityFeed {
  pub fn new() -> Self {
    Self {
      slot: Shared::new(Vec::new()),
    }
  }

  /// The latest snapshot, cloned out so no guard escapes to the render
  /// cycle.
  pub fn snapshot(&self) -> Vec<ActivityItem> {
    self.slot.read().clone()
  }

  /// The underlying state slot, for surfaces that bind to it directly.
  pub fn slot(&self) -> Shared<Vec<ActivityItem>> {
    self.slot.clone()
  }

  /// Spawns the polling task. The first fetch happens immediately, then on
  /// every interval tick.
  pub fn spawn_poller(&self, client: Arc<BackendClient>, interval: Duration) -> JoinHandle<()> {
    let slot = self.slot.clone();
    tokio::spawn(async move {
      let mut ticker = tokio::time::interval(interval);
      ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
      loop {
        ticker.tick().await;
        match client.recent_activities().await {
          Ok(items) => {
            debug!(count = items.len(), "Activity feed refreshed.");
            *slot.write() = items;
          }
          Err(error) => {
            warn!(%error, "Activity poll failed; keeping previous snapshot.");
          }
        }
      }
    })
  }
}
