//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`PgShipmentRepository`] - Shipment and status history reads
//! - [`PgLookupLogRepository`] - Lookup audit log writes

pub mod pg_lookup_log_repository;
pub mod pg_shipment_repository;

pub use pg_lookup_log_repository::PgLookupLogRepository;
pub use pg_shipment_repository::PgShipmentRepository;
