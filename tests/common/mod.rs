#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::mpsc;

use maxtrack::application::services::TrackingService;
use maxtrack::domain::entities::{Shipment, StatusEvent};
use maxtrack::domain::lookup_event::LookupEvent;
use maxtrack::domain::repositories::ShipmentRepository;
use maxtrack::error::AppError;
use maxtrack::state::AppState;

/// In-memory shipment store for handler tests.
///
/// Events are handed back in insertion order on purpose; the service is
/// responsible for sorting the timeline.
#[derive(Default)]
pub struct InMemoryShipmentRepository {
    shipments: Vec<Shipment>,
    events: Vec<StatusEvent>,
}

impl InMemoryShipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shipment(mut self, shipment: Shipment) -> Self {
        self.shipments.push(shipment);
        self
    }

    pub fn with_event(mut self, event: StatusEvent) -> Self {
        self.events.push(event);
        self
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, AppError> {
        Ok(self
            .shipments
            .iter()
            .find(|s| s.tracking_number == tracking_number)
            .cloned())
    }

    async fn list_status_events(&self, shipment_id: i64) -> Result<Vec<StatusEvent>, AppError> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.shipment_id == shipment_id)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store stub where every call fails, for 500/health degradation tests.
pub struct FailingShipmentRepository;

#[async_trait]
impl ShipmentRepository for FailingShipmentRepository {
    async fn find_by_tracking_number(&self, _: &str) -> Result<Option<Shipment>, AppError> {
        Err(AppError::internal(
            "Internal server error. Please try again later.",
            json!({ "source": "connection refused" }),
        ))
    }

    async fn list_status_events(&self, _: i64) -> Result<Vec<StatusEvent>, AppError> {
        Err(AppError::internal(
            "Internal server error. Please try again later.",
            json!({ "source": "connection refused" }),
        ))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal(
            "Internal server error. Please try again later.",
            json!({ "source": "connection refused" }),
        ))
    }
}

pub fn sample_shipment(id: i64, tracking_number: &str, current_status: &str) -> Shipment {
    let now = Utc::now();
    Shipment {
        id,
        tracking_number: tracking_number.to_string(),
        origin: "Jakarta".to_string(),
        destination: "Surabaya".to_string(),
        weight: 2.5,
        service_type: "Express".to_string(),
        carrier: "MAX Logistics".to_string(),
        estimated_delivery: None,
        current_status: current_status.to_string(),
        current_status_description: Some("Latest scan".to_string()),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_event(
    id: i64,
    shipment_id: i64,
    status: &str,
    occurred_at: DateTime<Utc>,
) -> StatusEvent {
    StatusEvent {
        id,
        shipment_id,
        status: status.to_string(),
        description: Some(format!("{status} scan")),
        location: Some("Jakarta Hub".to_string()),
        occurred_at,
    }
}

pub fn create_test_state(
    repository: Arc<dyn ShipmentRepository>,
) -> (AppState, mpsc::Receiver<LookupEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let tracking_service = Arc::new(TrackingService::with_label_classifier(repository));

    (AppState::new(tracking_service, tx), rx)
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `axum_test::TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
