//! Shipment entity representing a tracked consignment.

use chrono::{DateTime, NaiveDate, Utc};

/// A shipment record as maintained by operator tooling.
///
/// `current_status` is a free-text label from an open set. It is written
/// independently of the status history rows, so it may disagree with the
/// latest [`crate::domain::entities::StatusEvent`]; this service surfaces
/// both as-is and never derives one from the other.
#[derive(Debug, Clone)]
pub struct Shipment {
    pub id: i64,
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    /// Weight in kilograms.
    pub weight: f64,
    pub service_type: String,
    pub carrier: String,
    pub estimated_delivery: Option<NaiveDate>,
    pub current_status: String,
    pub current_status_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
