// client/src/dashboard/mod.rs

//! Dashboard view-state: chart-series shaping and the polling activity feed.

pub mod charts;
pub mod feed;

pub use charts::{fill_missing_days, series_or_fallback, synthetic_series};
pub use feed::ActivityFeed;
