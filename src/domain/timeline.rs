//! Timeline presentation-status derivation.
//!
//! Each status history entry is shown as `completed`, `current`, or `pending`.
//! The classification is label-based, not temporal: an event whose label
//! matches the shipment's current status is `current`, any other label from
//! the known lifecycle set is `completed`, and everything else is `pending`.
//! A later-dated event with a known label is still `completed`; this mirrors
//! how operators stage future milestones and must not be replaced with a
//! comparison against the current time.

use serde::Serialize;

use crate::domain::entities::StatusEvent;

/// Lifecycle labels that classify as `completed` when not current.
pub const KNOWN_STATUS_LABELS: [&str; 6] = [
    "Package Received",
    "Package Picked Up",
    "In Transit",
    "Out for Delivery",
    "Delivered",
    "Exception",
];

/// Presentation state of a single timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationStatus {
    Completed,
    Current,
    Pending,
}

impl PresentationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationStatus::Completed => "completed",
            PresentationStatus::Current => "current",
            PresentationStatus::Pending => "pending",
        }
    }
}

/// Strategy for deriving a timeline entry's presentation status.
///
/// The default [`LabelClassifier`] reproduces the historical label-based
/// behavior. A temporal classifier can be substituted here without changing
/// [`crate::application::services::TrackingService`]'s contract.
pub trait TimelineClassifier: Send + Sync {
    fn classify(&self, event_status: &str, current_status: &str) -> PresentationStatus;
}

/// Label-based classifier.
///
/// Matching against the current status is exact and case-sensitive, as is
/// membership in [`KNOWN_STATUS_LABELS`].
#[derive(Debug, Default, Clone)]
pub struct LabelClassifier;

impl TimelineClassifier for LabelClassifier {
    fn classify(&self, event_status: &str, current_status: &str) -> PresentationStatus {
        if event_status == current_status {
            return PresentationStatus::Current;
        }

        if KNOWN_STATUS_LABELS.contains(&event_status) {
            return PresentationStatus::Completed;
        }

        PresentationStatus::Pending
    }
}

/// A status event paired with its derived presentation status.
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub event: StatusEvent,
    pub presentation: PresentationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_status_match_wins() {
        let classifier = LabelClassifier;
        assert_eq!(
            classifier.classify("In Transit", "In Transit"),
            PresentationStatus::Current
        );
        // Even a label outside the known set is current when it matches.
        assert_eq!(
            classifier.classify("Held at Customs", "Held at Customs"),
            PresentationStatus::Current
        );
    }

    #[test]
    fn test_known_labels_complete() {
        let classifier = LabelClassifier;
        for label in KNOWN_STATUS_LABELS {
            if label != "Delivered" {
                assert_eq!(
                    classifier.classify(label, "Delivered"),
                    PresentationStatus::Completed,
                    "label {label:?} should classify as completed"
                );
            }
        }
    }

    #[test]
    fn test_unknown_label_pending() {
        let classifier = LabelClassifier;
        assert_eq!(
            classifier.classify("Customs Clearance", "In Transit"),
            PresentationStatus::Pending
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let classifier = LabelClassifier;
        // "in transit" neither matches the current status nor the known set.
        assert_eq!(
            classifier.classify("in transit", "In Transit"),
            PresentationStatus::Pending
        );
    }

    #[test]
    fn test_presentation_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PresentationStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(PresentationStatus::Current.as_str(), "current");
    }
}
