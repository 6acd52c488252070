//! Shipment lookup and timeline derivation service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Shipment;
use crate::domain::repositories::ShipmentRepository;
use crate::domain::timeline::{LabelClassifier, TimelineClassifier, TimelineEntry};
use crate::error::AppError;
use crate::utils::tracking_number::TrackingNumber;

/// A shipment together with its derived display timeline.
#[derive(Debug, Clone)]
pub struct TrackingReport {
    pub shipment: Shipment,
    /// Timeline entries ordered oldest to newest.
    pub timeline: Vec<TimelineEntry>,
}

/// Read-only service answering tracking queries.
///
/// Holds an injected store handle and a [`TimelineClassifier`] strategy;
/// connection lifecycle is managed by the host, not here. The service never
/// mutates shipment or status data.
pub struct TrackingService {
    repository: Arc<dyn ShipmentRepository>,
    classifier: Arc<dyn TimelineClassifier>,
}

impl TrackingService {
    pub fn new(
        repository: Arc<dyn ShipmentRepository>,
        classifier: Arc<dyn TimelineClassifier>,
    ) -> Self {
        Self {
            repository,
            classifier,
        }
    }

    /// Creates a service with the default label-based classifier.
    pub fn with_label_classifier(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self::new(repository, Arc::new(LabelClassifier))
    }

    /// Looks up a shipment and derives its display timeline.
    ///
    /// Events are re-sorted by `(occurred_at, id)` here, so the ascending
    /// order of the returned timeline does not depend on the store's row
    /// order. Identical inputs against unchanged store state yield identical
    /// reports.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no shipment matches the tracking
    /// number, or [`AppError::Internal`] on store failures.
    pub async fn track(&self, tracking_number: &TrackingNumber) -> Result<TrackingReport, AppError> {
        let shipment = self
            .repository
            .find_by_tracking_number(tracking_number.as_str())
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Tracking number not found",
                    json!({ "tracking_number": tracking_number.as_str() }),
                )
            })?;

        let mut events = self.repository.list_status_events(shipment.id).await?;
        events.sort_by(|a, b| {
            a.occurred_at
                .cmp(&b.occurred_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let timeline = events
            .into_iter()
            .map(|event| {
                let presentation = self
                    .classifier
                    .classify(&event.status, &shipment.current_status);
                TimelineEntry {
                    event,
                    presentation,
                }
            })
            .collect();

        Ok(TrackingReport { shipment, timeline })
    }

    /// Checks store connectivity for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
