//! Status history entry for a shipment.

use chrono::{DateTime, Utc};

/// One step in a shipment's status history.
///
/// Events belong to exactly one shipment. The display timeline is this
/// sequence ordered by `occurred_at` ascending, ties broken by `id`
/// (insertion order).
#[derive(Debug, Clone)]
pub struct StatusEvent {
    pub id: i64,
    pub shipment_id: i64,
    pub status: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub occurred_at: DateTime<Utc>,
}
