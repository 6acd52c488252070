//! DTOs for the tracking endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::TrackingReport;
use crate::domain::timeline::TimelineEntry;

/// Query parameters for `GET /api/track`.
#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    pub tracking_number: Option<String>,
}

/// JSON body for `POST /api/track`.
#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    pub tracking_number: Option<String>,
}

/// Tracking payload returned inside the response envelope.
#[derive(Debug, Serialize)]
pub struct TrackingData {
    pub tracking_number: String,
    /// Current status label from the shipment record.
    pub status: String,
    /// Current status description; set independently of the status history.
    pub current_status: Option<String>,
    /// `YYYY-MM-DD HH:MM`
    pub last_updated: String,
    pub origin: String,
    pub destination: String,
    /// `YYYY-MM-DD` or null when not scheduled.
    pub estimated_delivery: Option<String>,
    /// Weight with unit, e.g. `"2.50 kg"`.
    pub weight: String,
    pub service_type: String,
    pub carrier: String,
    /// Oldest to newest.
    pub timeline: Vec<TimelineEntryDto>,
}

/// One rendered timeline entry.
#[derive(Debug, Serialize)]
pub struct TimelineEntryDto {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// `YYYY-MM-DD HH:MM`
    pub date: String,
    /// `completed`, `current`, or `pending`.
    pub status: &'static str,
}

const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

impl TrackingData {
    pub fn from_report(report: &TrackingReport) -> Self {
        let shipment = &report.shipment;

        Self {
            tracking_number: shipment.tracking_number.clone(),
            status: shipment.current_status.clone(),
            current_status: shipment.current_status_description.clone(),
            last_updated: shipment.updated_at.format(MINUTE_FORMAT).to_string(),
            origin: shipment.origin.clone(),
            destination: shipment.destination.clone(),
            estimated_delivery: shipment
                .estimated_delivery
                .map(|d| d.format("%Y-%m-%d").to_string()),
            weight: format!("{:.2} kg", shipment.weight),
            service_type: shipment.service_type.clone(),
            carrier: shipment.carrier.clone(),
            timeline: report.timeline.iter().map(TimelineEntryDto::from).collect(),
        }
    }
}

impl From<&TimelineEntry> for TimelineEntryDto {
    fn from(entry: &TimelineEntry) -> Self {
        Self {
            title: entry.event.status.clone(),
            description: entry.event.description.clone(),
            location: entry.event.location.clone(),
            date: entry.event.occurred_at.format(MINUTE_FORMAT).to_string(),
            status: entry.presentation.as_str(),
        }
    }
}
