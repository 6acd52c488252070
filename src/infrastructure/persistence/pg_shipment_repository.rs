//! PostgreSQL implementation of the shipment repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Shipment, StatusEvent};
use crate::domain::repositories::ShipmentRepository;
use crate::error::AppError;

/// PostgreSQL repository for shipment and status history reads.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgShipmentRepository {
    pool: Arc<PgPool>,
}

impl PgShipmentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShipmentRow {
    id: i64,
    tracking_number: String,
    origin: String,
    destination: String,
    weight: f64,
    service_type: String,
    carrier: String,
    estimated_delivery: Option<NaiveDate>,
    current_status: String,
    current_status_description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ShipmentRow> for Shipment {
    fn from(row: ShipmentRow) -> Self {
        Shipment {
            id: row.id,
            tracking_number: row.tracking_number,
            origin: row.origin,
            destination: row.destination,
            weight: row.weight,
            service_type: row.service_type,
            carrier: row.carrier,
            estimated_delivery: row.estimated_delivery,
            current_status: row.current_status,
            current_status_description: row.current_status_description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatusEventRow {
    id: i64,
    shipment_id: i64,
    status: String,
    status_description: Option<String>,
    location: Option<String>,
    status_date: DateTime<Utc>,
}

impl From<StatusEventRow> for StatusEvent {
    fn from(row: StatusEventRow) -> Self {
        StatusEvent {
            id: row.id,
            shipment_id: row.shipment_id,
            status: row.status,
            description: row.status_description,
            location: row.location,
            occurred_at: row.status_date,
        }
    }
}

#[async_trait]
impl ShipmentRepository for PgShipmentRepository {
    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, AppError> {
        let row = sqlx::query_as::<_, ShipmentRow>(
            r#"
            SELECT
                id,
                tracking_number,
                origin,
                destination,
                weight,
                service_type,
                carrier,
                estimated_delivery,
                current_status,
                current_status_description,
                created_at,
                updated_at
            FROM shipments
            WHERE tracking_number = $1
            "#,
        )
        .bind(tracking_number)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Shipment::from))
    }

    async fn list_status_events(&self, shipment_id: i64) -> Result<Vec<StatusEvent>, AppError> {
        let rows = sqlx::query_as::<_, StatusEventRow>(
            r#"
            SELECT
                id,
                shipment_id,
                status,
                status_description,
                location,
                status_date
            FROM shipment_status_history
            WHERE shipment_id = $1
            ORDER BY status_date ASC, id ASC
            "#,
        )
        .bind(shipment_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(StatusEvent::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
