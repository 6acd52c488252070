//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contract; concrete implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! - [`ShipmentRepository`] - Shipment and status history reads
//! - [`LookupLogRepository`] - Lookup request log writes

pub mod lookup_log_repository;
pub mod shipment_repository;

pub use lookup_log_repository::LookupLogRepository;
pub use shipment_repository::ShipmentRepository;

#[cfg(test)]
pub use lookup_log_repository::MockLookupLogRepository;
#[cfg(test)]
pub use shipment_repository::MockShipmentRepository;
