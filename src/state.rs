//! Shared application state injected into handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::TrackingService;
use crate::domain::lookup_event::LookupEvent;

/// Shared, cloneable application state.
///
/// Holds the tracking service (which owns the injected store handle) and the
/// sender side of the lookup-log channel. No per-request mutable state.
#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
    pub lookup_sender: mpsc::Sender<LookupEvent>,
}

impl AppState {
    pub fn new(
        tracking_service: Arc<TrackingService>,
        lookup_sender: mpsc::Sender<LookupEvent>,
    ) -> Self {
        Self {
            tracking_service,
            lookup_sender,
        }
    }
}
