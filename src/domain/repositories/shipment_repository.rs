//! Repository trait for shipment data access.

use crate::domain::entities::{Shipment, StatusEvent};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only repository interface for shipments and their status history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShipmentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Finds a shipment by its tracking number.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Shipment))` if found
    /// - `Ok(None)` if no shipment has this tracking number
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, AppError>;

    /// Lists all status events for a shipment, oldest first.
    ///
    /// Events are ordered by occurrence timestamp ascending, ties broken by
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_status_events(&self, shipment_id: i64) -> Result<Vec<StatusEvent>, AppError>;

    /// Checks store connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
