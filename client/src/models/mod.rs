// client/src/models/mod.rs

//! Data structures for the backend's wire surface.

// Declare child modules for each model family
pub mod address;
pub mod dashboard;
pub mod document;
pub mod order;
pub mod user;

// Re-export the model structs for convenient access
pub use address::{DeliveryAddress, NewAddress};
pub use dashboard::{ActivityItem, ActivityKind, DashboardStats, DeliveryRecord, OrderRecord, SeriesPoint};
pub use document::DocumentBlob;
pub use order::BulkOrderRequest;
pub use user::{ApprovalStatus, Role, UserAccount};
